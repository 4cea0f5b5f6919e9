//! Rebuild logical lines from raw calendar text.
//!
//! A raw line starting with a single space continues the previous line: the space is dropped and
//! the rest is appended verbatim. Both `\n` and `\r\n` line endings are accepted.
//!
//! # Examples
//!
//! ```rust
//! use ics2csv::parser::LineUnfolder;
//!
//! let input = "DESCRIPTION:a long\r\n  description\r\nLOCATION:Madrid\r\n";
//! let lines: Vec<String> = LineUnfolder::from_text(input)
//!     .map(|line| line.to_string())
//!     .collect();
//!
//! assert_eq!(lines, vec!["DESCRIPTION:a long description", "LOCATION:Madrid"]);
//! ```

use std::fmt;
use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use super::FOLD_PREFIX;

/// A logical line, after its continuation lines have been joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: usize,
    inner: String,
}

impl Line {
    /// 1-based number of the first raw line this logical line was built from
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

pub struct LineUnfolder<I: Iterator> {
    lines: Peekable<Enumerate<I>>,
}

impl<'a> LineUnfolder<Lines<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        LineUnfolder::new(text.lines())
    }
}

impl<'a, I: Iterator<Item = &'a str>> LineUnfolder<I> {
    /// Unfold already split raw lines (without their line terminators).
    pub fn new(lines: I) -> Self {
        LineUnfolder {
            lines: lines.enumerate().peekable(),
        }
    }
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for LineUnfolder<I> {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, first) = self.lines.next()?;
        let mut inner = first.to_owned();

        while let Some((_, continuation)) = self
            .lines
            .next_if(|(_, line)| line.starts_with(FOLD_PREFIX))
        {
            inner.push_str(&continuation[FOLD_PREFIX.len_utf8()..]);
        }

        Some(Line {
            number: index + 1,
            inner,
        })
    }
}
