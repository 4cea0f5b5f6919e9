use std::fmt;

/// Longest description excerpt shown in a diagnostic
pub const PREVIEW_LEN: usize = 70;

/// A recoverable finding about a single event
///
/// Positions are always the 1-based ordinal of the event in the source calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The event has no `DESCRIPTION` and was dropped
    MissingDescription { position: usize },
    /// The `DESCRIPTION` does not start with an anchor and the event was dropped
    BadDescription { position: usize, preview: String },
    /// The anchor in the `DESCRIPTION` is never closed and the event was dropped
    MalformedAnchor { position: usize, preview: String },
    /// The event has no start date and was dropped
    MissingDate { position: usize },
    /// Same title and location as an earlier event; nothing is dropped
    Duplicate { position: usize, original: usize },
}

impl Diagnostic {
    pub fn position(&self) -> usize {
        match self {
            Diagnostic::MissingDescription { position }
            | Diagnostic::BadDescription { position, .. }
            | Diagnostic::MalformedAnchor { position, .. }
            | Diagnostic::MissingDate { position }
            | Diagnostic::Duplicate { position, .. } => *position,
        }
    }

    /// Whether the event this diagnostic is about was removed from the output
    pub fn drops_event(&self) -> bool {
        !matches!(self, Diagnostic::Duplicate { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingDescription { position } => {
                write!(f, "Event {} has no DESCRIPTION. Skipping.", position)
            }
            Diagnostic::BadDescription { position, preview } => write!(
                f,
                "Event {} has bad DESCRIPTION ({:?}). Skipping.",
                position, preview
            ),
            Diagnostic::MalformedAnchor { position, preview } => write!(
                f,
                "Event {} has an unclosed link in DESCRIPTION ({:?}). Skipping.",
                position, preview
            ),
            Diagnostic::MissingDate { position } => {
                write!(f, "Event {} has no start date. Skipping.", position)
            }
            Diagnostic::Duplicate { position, original } => write!(
                f,
                "Warning: event {} seems to be a duplicate of event {}",
                position, original
            ),
        }
    }
}

/// The first [`PREVIEW_LEN`] characters of `text`
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_LEN).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "ñ".repeat(100);
        let short = preview(&text);

        assert_eq!(short.chars().count(), PREVIEW_LEN);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn display_names_both_positions() {
        let dup = Diagnostic::Duplicate {
            position: 4,
            original: 3,
        };

        assert_eq!(
            dup.to_string(),
            "Warning: event 4 seems to be a duplicate of event 3"
        );
        assert_eq!(dup.position(), 4);
        assert!(!dup.drops_event());
    }

    #[test]
    fn missing_description_display() {
        let diag = Diagnostic::MissingDescription { position: 2 };
        assert_eq!(diag.to_string(), "Event 2 has no DESCRIPTION. Skipping.");
        assert!(diag.drops_event());
    }
}
