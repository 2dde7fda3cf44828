// Rust guideline compliant 2026-10-18

//! Parser for the line-oriented hierarchy description.
//!
//! ```text
//! # Comment
//! Deliverable: Lorem ipsum dolor sit amet
//!     Epic: Consectetur adipiscing elit
//!         Story: Curabitur venenatis tristique diam
//! ```
//!
//! Indentation is cosmetic. Nesting follows from the order of kinds.

use crate::models::{IssueKind, Line};
use crate::{Error, Result};
use std::io::BufRead;

const SEPARATOR: &str = ": ";

/// Parses one raw input line.
///
/// # Arguments
///
/// * `number` - 1-based line number, used in error reports
/// * `raw` - The raw line text
///
/// # Returns
///
/// `Ok(None)` for blank lines and `#` comments, `Ok(Some(Line))` otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The line has no `": "` separator (`MalformedLine`)
/// - The kind token is unknown (`InvalidIssueKind`)
pub fn parse_line(number: usize, raw: &str) -> Result<Option<Line>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (kind, summary) = trimmed
        .split_once(SEPARATOR)
        .ok_or_else(|| Error::MalformedLine {
            line: number,
            content: trimmed.to_string(),
        })?;

    Ok(Some(Line {
        number,
        kind: kind.parse::<IssueKind>()?,
        summary: summary.to_string(),
    }))
}

/// Lazily parses every line of a reader, skipping blanks and comments.
///
/// Lines are yielded in input order; the first error ends iteration for
/// callers that stop on `Err`.
pub fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Line>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| match raw {
            Ok(raw) => parse_line(idx + 1, &raw).transpose(),
            Err(e) => Some(Err(Error::Io(e))),
        })
}
