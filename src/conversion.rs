use std::io::Write;

use crate::configuration::config::Config;
use crate::error::ConversionError;
use crate::model::{Diagnostic, EventList, EventRecord};
use crate::output::write_csv;
use crate::parser::parse_events;
use crate::process::{check_duplicates, extract_fields, remove_malformed};

/// The events of one calendar, ready to be written as CSV
#[derive(Debug)]
pub struct Conversion {
    events: EventList,
    diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Run the whole pipeline over the text of a calendar.
    ///
    /// Diagnostics are kept in the order they were found.
    /// A [`ConversionError`] means the calendar cannot be trusted and nothing should be written.
    pub fn new(input: &str, config: &Config) -> Result<Conversion, ConversionError> {
        Conversion::with_reporter(input, config, |_| {})
    }

    /// Like [`Conversion::new`], calling `report` for each diagnostic as soon as its stage ends.
    ///
    /// Diagnostics of the stages that ran are reported even when a later stage fails.
    pub fn with_reporter<F>(
        input: &str,
        config: &Config,
        mut report: F,
    ) -> Result<Conversion, ConversionError>
    where
        F: FnMut(&Diagnostic),
    {
        log::info!("parsing calendar events...");
        let events = parse_events(input)?;
        log::info!("read {} events", events.len());

        log::debug!("removing malformed events...");
        let (events, mut diagnostics) = remove_malformed(events);
        diagnostics.iter().for_each(&mut report);

        log::debug!("extracting fields...");
        let (events, extract_diagnostics) =
            extract_fields(events, config.missing_date, config.utc_offset())?;
        extract_diagnostics.iter().for_each(&mut report);
        diagnostics.extend(extract_diagnostics);

        if config.warn_duplicates() {
            log::debug!("checking for duplicates...");
            let duplicates = check_duplicates(&events);
            duplicates.iter().for_each(&mut report);
            diagnostics.extend(duplicates);
        } else {
            log::debug!("skipping duplicate check as instructed...");
        }

        log::info!(
            "{} events to write, {} dropped",
            events.len(),
            diagnostics.iter().filter(|d| d.drops_event()).count()
        );

        Ok(Conversion {
            events,
            diagnostics,
        })
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_events(self) -> EventList {
        self.events
    }

    pub fn write_csv<W: Write>(&self, write: W) -> Result<(), csv::Error> {
        write_csv(write, &self.events)
    }
}
