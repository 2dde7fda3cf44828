// Rust guideline compliant 2026-10-18

//! Lexical recognition of existing ticket references.
//!
//! A summary that starts with a key like `MAR-123` names a ticket that
//! already exists; anything after the key is descriptive and ignored.
//! Recognition never consults the tracker.

use crate::models::{IssueKey, TicketRef};
use regex::Regex;
use std::sync::LazyLock;

static KEY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]+-[0-9]+").expect("ticket key pattern is a valid regex")
});

/// Classifies a summary as an existing ticket reference or a creation request.
///
/// # Arguments
///
/// * `summary` - The summary text of an input line
///
/// # Returns
///
/// `TicketRef::Existing` carrying exactly the matched key prefix, or
/// `TicketRef::ToCreate`.
pub fn recognize(summary: &str) -> TicketRef {
    match KEY_PREFIX.find(summary) {
        Some(m) => TicketRef::Existing(IssueKey::new(m.as_str())),
        None => TicketRef::ToCreate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_is_existing() {
        assert_eq!(
            recognize("ABC-123"),
            TicketRef::Existing(IssueKey::from("ABC-123"))
        );
    }

    #[test]
    fn test_trailing_text_is_discarded() {
        assert_eq!(
            recognize("ABC-123 and more"),
            TicketRef::Existing(IssueKey::from("ABC-123"))
        );
        assert_eq!(
            recognize("MAR-7: already filed"),
            TicketRef::Existing(IssueKey::from("MAR-7"))
        );
    }

    #[test]
    fn test_plain_summary_needs_creation() {
        assert_eq!(recognize("Add login page"), TicketRef::ToCreate);
        assert_eq!(recognize(""), TicketRef::ToCreate);
    }

    #[test]
    fn test_key_must_be_at_start() {
        assert_eq!(recognize("see ABC-123"), TicketRef::ToCreate);
        assert_eq!(recognize(" ABC-123"), TicketRef::ToCreate);
    }

    #[test]
    fn test_lowercase_or_incomplete_keys_need_creation() {
        assert_eq!(recognize("abc-123"), TicketRef::ToCreate);
        assert_eq!(recognize("ABC-"), TicketRef::ToCreate);
        assert_eq!(recognize("ABC123"), TicketRef::ToCreate);
        assert_eq!(recognize("A1-23"), TicketRef::ToCreate);
    }
}
