use std::mem;

use super::builder::EventBuilder;
use super::line::Line;
use super::{BEGIN, BEGIN_EVENT, END, END_EVENT, VALUE_DELIMITER};
use crate::error::ParseError;
use crate::model::EventList;

/// Where the tokenizer is in the calendar
#[derive(Debug, Default)]
pub enum ParserState {
    /// Between events, every line is ignored until the next `BEGIN:VEVENT`
    #[default]
    Outside,
    /// Inside a top-level event, properties are collected
    InEvent(EventBuilder),
    /// Inside `depth` levels of sub-components (alarms etc.) of an event
    Nested { event: EventBuilder, depth: usize },
}

/// Turns logical lines into event records
///
/// Create a new one for every calendar, it holds no state shared with anything else.
#[derive(Debug, Default)]
pub struct Tokenizer {
    state: ParserState,
    events: EventList,
    events_seen: usize,
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Advance the state machine by one logical line.
    ///
    /// An error leaves the tokenizer in an unspecified state.
    pub fn feed(&mut self, line: &Line) -> Result<(), ParseError> {
        let text = line.as_str();

        self.state = match mem::take(&mut self.state) {
            ParserState::Outside if text.starts_with(BEGIN_EVENT) => {
                self.events_seen += 1;
                log::trace!("line {}: event {} starts", line.number(), self.events_seen);
                ParserState::InEvent(EventBuilder::new(self.events_seen))
            }
            ParserState::Outside => ParserState::Outside,

            ParserState::InEvent(event) if text.starts_with(END_EVENT) => {
                log::trace!("line {}: event {} ends", line.number(), event.position());
                self.events.push(event.build());
                ParserState::Outside
            }
            ParserState::InEvent(event)
                if text.starts_with(BEGIN) && !text.starts_with(BEGIN_EVENT) =>
            {
                log::trace!("line {}: entering {}", line.number(), text);
                ParserState::Nested { event, depth: 1 }
            }
            ParserState::InEvent(mut event) => {
                let (key, value) = split_property(line)?;
                event.add_property(key, value);
                ParserState::InEvent(event)
            }

            ParserState::Nested { event, depth } if text.starts_with(BEGIN) => {
                ParserState::Nested {
                    event,
                    depth: depth + 1,
                }
            }
            ParserState::Nested { event, depth } if text.starts_with(END) => match depth {
                1 => ParserState::InEvent(event),
                _ => ParserState::Nested {
                    event,
                    depth: depth - 1,
                },
            },
            // properties of sub-components never reach the event
            nested @ ParserState::Nested { .. } => nested,
        };

        Ok(())
    }

    /// The events completed so far, in the order they appeared.
    pub fn finish(self) -> EventList {
        match self.state {
            ParserState::InEvent(event) | ParserState::Nested { event, .. } => {
                log::warn!(
                    "input ended inside event {}, the event was discarded",
                    event.position()
                )
            }
            ParserState::Outside => {}
        }
        self.events
    }
}

/// Split a logical line at its first `:` into the raw key and value.
pub fn split_property(line: &Line) -> Result<(&str, &str), ParseError> {
    line.as_str()
        .split_once(VALUE_DELIMITER)
        .ok_or_else(|| ParseError::MissingSeparator {
            number: line.number(),
            line: line.as_str().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::LineUnfolder;

    fn tokenize(input: &str) -> Result<EventList, ParseError> {
        let mut tokenizer = Tokenizer::new();
        for line in LineUnfolder::from_text(input) {
            tokenizer.feed(&line)?;
        }
        Ok(tokenizer.finish())
    }

    #[test]
    fn properties_outside_events_are_ignored() {
        let input = indoc! {"
            BEGIN:VCALENDAR
            X-WR-CALNAME:Ciencia
            BEGIN:VEVENT
            LOCATION:Madrid
            END:VEVENT
            END:VCALENDAR
        "};

        let events = tokenize(input).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].len(), 1);
        assert_eq!(events[0].get("LOCATION"), Some("Madrid"));
        assert_eq!(events[0].get("X-WR-CALNAME"), None);
    }

    #[test]
    fn nested_components_are_skipped_at_any_depth() {
        let input = indoc! {"
            BEGIN:VEVENT
            SUMMARY:outer
            BEGIN:VALARM
            ACTION:DISPLAY
            BEGIN:X-INNER
            SUMMARY:inner
            END:X-INNER
            DESCRIPTION:alarm text
            END:VALARM
            LOCATION:Bilbao
            END:VEVENT
        "};

        let events = tokenize(input).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get("SUMMARY"), Some("outer"));
        assert_eq!(events[0].get("LOCATION"), Some("Bilbao"));
        assert_eq!(events[0].get("ACTION"), None);
        assert_eq!(events[0].get("DESCRIPTION"), None);
    }

    #[test]
    fn keys_keep_their_parameters() {
        let input = indoc! {"
            BEGIN:VEVENT
            DTSTART;TZID=Europe/Madrid:20240211T180000
            END:VEVENT
        "};

        let events = tokenize(input).unwrap();
        assert_eq!(
            events[0].get("DTSTART;TZID=Europe/Madrid"),
            Some("20240211T180000")
        );
    }

    #[test]
    fn value_may_contain_colons() {
        let input = "BEGIN:VEVENT\nURL:http://example.com:8080/x\nEND:VEVENT\n";

        let events = tokenize(input).unwrap();
        assert_eq!(events[0].get("URL"), Some("http://example.com:8080/x"));
    }

    #[test]
    fn positions_count_every_event() {
        let input = "BEGIN:VEVENT\nEND:VEVENT\nBEGIN:VEVENT\nEND:VEVENT\n";

        let positions: Vec<_> = tokenize(input)
            .unwrap()
            .iter()
            .map(|e| e.position())
            .collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn line_without_separator_fails() {
        let input = "BEGIN:VEVENT\nLOCATION:x\nGARBAGE\nEND:VEVENT\n";

        assert_eq!(
            tokenize(input),
            Err(ParseError::MissingSeparator {
                number: 3,
                line: "GARBAGE".to_owned()
            })
        );
    }

    #[test]
    fn garbage_outside_events_is_fine() {
        let input = "GARBAGE\nBEGIN:VEVENT\nEND:VEVENT\nMORE GARBAGE\n";
        assert_eq!(tokenize(input).unwrap().len(), 1);
    }

    #[test]
    fn unterminated_event_is_dropped() {
        let input = "BEGIN:VEVENT\nLOCATION:x\nEND:VEVENT\nBEGIN:VEVENT\nLOCATION:y\n";

        let events = tokenize(input).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get("LOCATION"), Some("x"));
    }

    #[test]
    fn state_follows_nesting() {
        let mut tokenizer = Tokenizer::new();
        let lines: Vec<_> =
            LineUnfolder::from_text("BEGIN:VEVENT\nBEGIN:VALARM\nBEGIN:X\nEND:X\nEND:VALARM\n")
                .collect();

        tokenizer.feed(&lines[0]).unwrap();
        assert!(matches!(tokenizer.state(), ParserState::InEvent(_)));
        tokenizer.feed(&lines[1]).unwrap();
        tokenizer.feed(&lines[2]).unwrap();
        assert!(matches!(
            tokenizer.state(),
            ParserState::Nested { depth: 2, .. }
        ));
        tokenizer.feed(&lines[3]).unwrap();
        tokenizer.feed(&lines[4]).unwrap();
        assert!(matches!(tokenizer.state(), ParserState::InEvent(_)));
    }
}
