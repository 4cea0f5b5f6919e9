use chrono::Duration;

use super::date::{readable_date, StartDate};
use crate::configuration::types::MissingDatePolicy;
use crate::error::ExtractError;
use crate::model::diagnostic::preview;
use crate::model::event::{DATE, DESCRIPTION, LINK, TITLE};
use crate::model::{Diagnostic, EventList, EventRecord};

const HREF: &str = "href=";
const TAG_END: char = '>';
const ANCHOR_END: &str = "</a>";

/// The parts of a `<a href="LINK">TITLE</a>REST` description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionParts<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub rest: &'a str,
}

impl<'a> DescriptionParts<'a> {
    /// Split a description into title, link and the remaining text, all trimmed.
    ///
    /// Returns `None` when there is no `href=`, no `</a>`, or no `>` between them.
    pub fn split(description: &'a str) -> Option<DescriptionParts<'a>> {
        let link_start = description.find(HREF)? + HREF.len();
        let text_end = description.find(ANCHOR_END)?;
        let tag_end = link_start + description[link_start..].find(TAG_END)?;
        if tag_end >= text_end {
            return None;
        }

        Some(DescriptionParts {
            title: description[tag_end + 1..text_end].trim(),
            link: description[link_start..tag_end].trim_matches('"'),
            rest: description[text_end + ANCHOR_END.len()..].trim(),
        })
    }
}

/// Add `TITLE`, `LINK` and `DATE` to every event and strip the link from `DESCRIPTION`.
///
/// Events are expected to have passed [`remove_malformed`](super::sanitize::remove_malformed).
/// An event whose link is never closed is dropped with a diagnostic, and so is an event without
/// a start date when `missing_date` is [`MissingDatePolicy::Skip`]. Under
/// [`MissingDatePolicy::Abort`] the error carries the fields as they were read, before extraction.
pub fn extract_fields(
    events: EventList,
    missing_date: MissingDatePolicy,
    utc_offset: Duration,
) -> Result<(EventList, Vec<Diagnostic>), ExtractError> {
    let mut kept = Vec::with_capacity(events.len());
    let mut diagnostics = Vec::new();

    for mut event in events {
        let raw_fields = (missing_date == MissingDatePolicy::Abort
            && StartDate::of(&event).is_none())
        .then(|| event.sorted_fields());

        if let Some(problem) = extract_title_and_link(&mut event) {
            log::debug!("{}", problem);
            diagnostics.push(problem);
            continue;
        }

        match readable_date(&event, utc_offset)? {
            Some(date) => event.insert(DATE, date),
            None if missing_date == MissingDatePolicy::Skip => {
                let problem = Diagnostic::MissingDate {
                    position: event.position(),
                };
                log::debug!("{}", problem);
                diagnostics.push(problem);
                continue;
            }
            None => {
                return Err(ExtractError::MissingDate {
                    position: event.position(),
                    fields: raw_fields.unwrap_or_else(|| event.sorted_fields()),
                })
            }
        }

        kept.push(event);
    }

    Ok((kept, diagnostics))
}

/// Create the fields `TITLE` and `LINK`, and update `DESCRIPTION`.
fn extract_title_and_link(event: &mut EventRecord) -> Option<Diagnostic> {
    let description = event.get(DESCRIPTION).unwrap_or_default();

    let Some(parts) = DescriptionParts::split(description) else {
        return Some(Diagnostic::MalformedAnchor {
            position: event.position(),
            preview: preview(description),
        });
    };
    let (title, link, rest) = (
        parts.title.to_owned(),
        parts.link.to_owned(),
        parts.rest.to_owned(),
    );

    event.insert(TITLE, title);
    event.insert(LINK, link);
    event.insert(DESCRIPTION, rest);
    None
}
