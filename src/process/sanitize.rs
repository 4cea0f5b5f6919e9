use crate::model::diagnostic::preview;
use crate::model::event::DESCRIPTION;
use crate::model::{Diagnostic, EventList};

/// Every usable description starts with a link to the event page
pub const DESCRIPTION_PREFIX: &str = "<a href=";

/// Drop the events whose `DESCRIPTION` is missing or does not start with a link.
///
/// Returns the remaining events in their original order and one diagnostic per dropped event.
pub fn remove_malformed(events: EventList) -> (EventList, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let events = events
        .into_iter()
        .filter(|event| {
            let problem = match event.get(DESCRIPTION) {
                None => Diagnostic::MissingDescription {
                    position: event.position(),
                },
                Some(description) if !description.starts_with(DESCRIPTION_PREFIX) => {
                    Diagnostic::BadDescription {
                        position: event.position(),
                        preview: preview(description),
                    }
                }
                Some(_) => return true,
            };
            log::debug!("{}", problem);
            diagnostics.push(problem);
            false
        })
        .collect();

    (events, diagnostics)
}
