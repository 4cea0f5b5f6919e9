use doku::Document;
use serde::{Deserialize, Serialize};

/// What to do with an event that has no start date
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Document)]
#[serde(rename_all = "lowercase")]
pub enum MissingDatePolicy {
    /// Stop the whole conversion, nothing is written
    #[default]
    Abort,
    /// Drop the event with a warning and carry on
    Skip,
}
