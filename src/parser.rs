//! Read the events of an iCalendar text.
//!
//! Only the parts of the format needed to list events are understood: `BEGIN`/`END` blocks,
//! `KEY:VALUE` properties and folded lines. Property parameters are kept as part of the key.
//!
//! # Examples
//!
//! ```rust
//! let input = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nLOCATION:Madrid\\, Spain\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
//! let events = ics2csv::parser::parse_events(input).unwrap();
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].get("LOCATION"), Some("Madrid, Spain"));
//! ```

const FOLD_PREFIX: char = ' ';
const VALUE_DELIMITER: char = ':';

const BEGIN: &str = "BEGIN:";
const END: &str = "END:";
const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

mod builder;
pub use builder::{unescape, EventBuilder};

mod line;
pub use line::{Line, LineUnfolder};

mod tokenizer;
pub use tokenizer::{split_property, ParserState, Tokenizer};

use crate::error::ParseError;
use crate::model::EventList;

/// Parse every top-level event of `input`, in order of appearance.
pub fn parse_events(input: &str) -> Result<EventList, ParseError> {
    let mut tokenizer = Tokenizer::new();
    for line in LineUnfolder::from_text(input) {
        tokenizer.feed(&line)?;
    }
    Ok(tokenizer.finish())
}
