use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::ExtractError;
use crate::model::EventRecord;

/// Whole-day events
pub const DATE_ONLY_KEY: &str = "DTSTART;VALUE=DATE";
/// Local Madrid time
pub const MADRID_KEY: &str = "DTSTART;TZID=Europe/Madrid";
/// UTC time
pub const UTC_KEY: &str = "DTSTART";

const DATE_ONLY_PARSING_FORMAT: &str = "%Y%m%d";
const LOCAL_PARSING_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_PARSING_FORMAT: &str = "%Y%m%dT%H%M%SZ";

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Which of the start date encodings an event uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDate<'a> {
    DateOnly(&'a str),
    Madrid(&'a str),
    Utc(&'a str),
}

impl<'a> StartDate<'a> {
    /// Pick the start date of `event`, preferring whole-day, then Madrid, then UTC.
    pub fn of(event: &'a EventRecord) -> Option<StartDate<'a>> {
        event
            .get(DATE_ONLY_KEY)
            .map(StartDate::DateOnly)
            .or_else(|| event.get(MADRID_KEY).map(StartDate::Madrid))
            .or_else(|| event.get(UTC_KEY).map(StartDate::Utc))
    }

    fn key(&self) -> &'static str {
        match self {
            StartDate::DateOnly(_) => DATE_ONLY_KEY,
            StartDate::Madrid(_) => MADRID_KEY,
            StartDate::Utc(_) => UTC_KEY,
        }
    }

    /// Render as `DD/MM/YYYY`, or `DD/MM/YYYY HH:MM` when there is a time of day.
    ///
    /// UTC times are shifted by `utc_offset`, there is no daylight saving adjustment.
    pub fn format(&self, utc_offset: Duration) -> Result<String, chrono::ParseError> {
        let formatted = match *self {
            StartDate::DateOnly(value) => NaiveDate::parse_from_str(value, DATE_ONLY_PARSING_FORMAT)?
                .format(DATE_FORMAT)
                .to_string(),
            StartDate::Madrid(value) => NaiveDateTime::parse_from_str(value, LOCAL_PARSING_FORMAT)?
                .format(DATETIME_FORMAT)
                .to_string(),
            StartDate::Utc(value) => {
                (NaiveDateTime::parse_from_str(value, UTC_PARSING_FORMAT)? + utc_offset)
                    .format(DATETIME_FORMAT)
                    .to_string()
            }
        };
        Ok(formatted)
    }

    fn value(&self) -> &'a str {
        match *self {
            StartDate::DateOnly(value) | StartDate::Madrid(value) | StartDate::Utc(value) => value,
        }
    }
}

/// The readable start date of `event`, or `None` if it has none of the known start keys.
pub fn readable_date(
    event: &EventRecord,
    utc_offset: Duration,
) -> Result<Option<String>, ExtractError> {
    let Some(start) = StartDate::of(event) else {
        return Ok(None);
    };
    log::debug!("event {}: parsing {:?}", event.position(), start);

    start
        .format(utc_offset)
        .map(Some)
        .map_err(|_| ExtractError::InvalidDate {
            position: event.position(),
            key: start.key(),
            value: start.value().to_owned(),
        })
}
