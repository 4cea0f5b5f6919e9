use std::collections::BTreeMap;

/// Error arising when a logical line cannot be split into a key and a value
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {number}: missing \":\" separator in {line:?}")]
    MissingSeparator { number: usize, line: String },
}

/// Error arising while deriving the date of an event
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Missing date in event {position}: {fields:?}")]
    MissingDate {
        position: usize,
        fields: BTreeMap<String, String>,
    },
    #[error("Event {position}: could not parse {key} value {value:?}")]
    InvalidDate {
        position: usize,
        key: &'static str,
        value: String,
    },
}

/// Any error that aborts a whole conversion
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
