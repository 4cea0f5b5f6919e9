use std::collections::{BTreeMap, HashMap};

pub const DESCRIPTION: &str = "DESCRIPTION";
pub const LOCATION: &str = "LOCATION";

// derived fields
pub const TITLE: &str = "TITLE";
pub const LINK: &str = "LINK";
pub const DATE: &str = "DATE";

/// A list of events in the order they appear in the calendar
pub type EventList = Vec<EventRecord>;

/// The properties of one `VEVENT` block
///
/// Keys are the raw property names including any `;PARAM=...` suffix, e.g. `DTSTART;VALUE=DATE`.
/// The derived fields (`TITLE`, `LINK`, `DATE`) are added to the same map during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    /// 1-based ordinal of the event in the source text
    position: usize,
    fields: HashMap<String, String>,
}

impl EventRecord {
    pub fn new(position: usize) -> EventRecord {
        EventRecord {
            position,
            fields: HashMap::new(),
        }
    }

    /// The 1-based position of this event in the calendar it was read from.
    ///
    /// This never changes when other events are filtered out.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Set a field, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A key-sorted copy of the fields, used in error messages
    pub fn sorted_fields(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn last_insert_wins() {
        let mut event = EventRecord::new(4);
        event.insert("LOCATION", "Madrid");
        event.insert("LOCATION", "Sevilla");

        assert_eq!(event.get(LOCATION), Some("Sevilla"));
        assert_eq!(event.len(), 1);
        assert_eq!(event.position(), 4);
    }

    #[test]
    fn new_event_has_no_fields() {
        let mut event = EventRecord::new(1);
        assert!(event.is_empty());

        event.insert(DESCRIPTION, "");
        assert!(!event.is_empty());
        assert!(event.contains_key(DESCRIPTION));
    }

    #[test]
    fn sorted_fields_are_ordered_by_key() {
        let mut event = EventRecord::new(1);
        event.insert("SUMMARY", "b");
        event.insert("DTEND", "a");

        let keys: Vec<_> = event.sorted_fields().into_keys().collect();
        assert_eq!(keys, vec!["DTEND", "SUMMARY"]);
    }
}
