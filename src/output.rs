use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

use crate::model::event::{DATE, DESCRIPTION, LINK, LOCATION, TITLE};
use crate::model::EventRecord;

/// The output columns as (field key, header) pairs, in order
pub const OUTPUT_COLUMNS: [(&str, &str); 5] = [
    (TITLE, "Título"),
    (DESCRIPTION, "Descripción"),
    (DATE, "Fecha"),
    (LOCATION, "Lugar"),
    (LINK, "Enlace"),
];

/// Write a header row and one row per event, every field quoted.
///
/// Columns missing from an event are written as empty strings.
pub fn write_csv<W: Write>(write: W, events: &[EventRecord]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(write);

    writer.write_record(OUTPUT_COLUMNS.iter().map(|(_, header)| header))?;
    for event in events {
        writer.write_record(
            OUTPUT_COLUMNS
                .iter()
                .map(|(key, _)| event.get(key).unwrap_or_default()),
        )?;
    }
    writer.flush()?;

    Ok(())
}
