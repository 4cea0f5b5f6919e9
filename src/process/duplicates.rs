use std::collections::HashMap;

use crate::model::event::{LOCATION, TITLE};
use crate::model::{Diagnostic, EventRecord};

/// Report events that share their title and location with an earlier event.
///
/// Each duplicate points at the first event seen with the same pair. A missing `LOCATION` counts
/// as an empty one. Nothing is removed.
pub fn check_duplicates(events: &[EventRecord]) -> Vec<Diagnostic> {
    let mut first_seen: HashMap<(&str, &str), usize> = HashMap::new();
    let mut diagnostics = Vec::new();

    for event in events {
        let key = (
            event.get(TITLE).unwrap_or_default(),
            event.get(LOCATION).unwrap_or_default(),
        );
        match first_seen.get(&key) {
            Some(&original) => {
                let duplicate = Diagnostic::Duplicate {
                    position: event.position(),
                    original,
                };
                log::debug!("{}", duplicate);
                diagnostics.push(duplicate);
            }
            None => {
                first_seen.insert(key, event.position());
            }
        }
    }

    diagnostics
}
