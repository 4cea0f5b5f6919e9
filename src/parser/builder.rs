use crate::model::EventRecord;

/// Replace the escape sequences found in calendar text values.
///
/// Only `\,` and `\n` are recognised, everything else is left untouched.
pub fn unescape(text: &str) -> String {
    text.replace(r"\,", ",").replace(r"\n", "\n")
}

/// Accumulates the properties of one top-level event
#[derive(Debug, Default)]
pub struct EventBuilder {
    event: EventRecord,
}

impl EventBuilder {
    pub fn new(position: usize) -> EventBuilder {
        EventBuilder {
            event: EventRecord::new(position),
        }
    }

    /// Store `key` with its unescaped value, replacing an earlier value for the same key.
    pub fn add_property(&mut self, key: &str, raw_value: &str) {
        log::trace!("event {}: {} = {:?}", self.event.position(), key, raw_value);
        self.event.insert(key, unescape(raw_value));
    }

    pub fn position(&self) -> usize {
        self.event.position()
    }

    pub fn build(self) -> EventRecord {
        self.event
    }
}
