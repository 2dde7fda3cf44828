// Rust guideline compliant 2026-10-18

//! Property-based tests for ticket reference recognition and line parsing.

use jira_util_core::dsl;
use jira_util_core::{recognize, IssueKey, IssueKind, TicketRef};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{1,10}-[0-9]{1,6}").unwrap()
}

fn arb_kind() -> impl Strategy<Value = IssueKind> {
    prop_oneof![
        Just(IssueKind::Deliverable),
        Just(IssueKind::Epic),
        Just(IssueKind::Story),
        Just(IssueKind::Task),
        Just(IssueKind::Spike),
        Just(IssueKind::Bug),
    ]
}

proptest! {
    /// **Property 1: Leading Keys Are Recognized**
    ///
    /// A summary that starts with a key refers to that key, whatever text
    /// follows it.
    #[test]
    fn test_leading_key_recognized(key in arb_key(), rest in "( [a-zA-Z0-9 ]{0,40})?") {
        let summary = format!("{}{}", key, rest);
        prop_assert_eq!(recognize(&summary), TicketRef::Existing(IssueKey::new(key)));
    }

    /// **Property 2: Lowercase Summaries Are Never Keys**
    #[test]
    fn test_lowercase_summary_creates(summary in "[a-z][a-z0-9 -]{0,40}") {
        prop_assert_eq!(recognize(&summary), TicketRef::ToCreate);
    }

    /// **Property 3: Keys After a Leading Space Are Ignored**
    #[test]
    fn test_key_not_at_start(key in arb_key()) {
        let summary = format!(" {}", key);
        prop_assert_eq!(recognize(&summary), TicketRef::ToCreate);
    }

    /// **Property 4: Indentation Is Not Significant**
    ///
    /// Any mix of leading spaces and tabs parses to the same line.
    #[test]
    fn test_indentation_ignored(
        indent in "[ \t]{0,12}",
        kind in arb_kind(),
        summary in "[A-Za-z][A-Za-z0-9 ]{0,30}[A-Za-z0-9]"
    ) {
        let raw = format!("{}{}: {}", indent, kind, summary);
        let line = dsl::parse_line(3, &raw).unwrap().unwrap();
        prop_assert_eq!(line.number, 3);
        prop_assert_eq!(line.kind, kind);
        prop_assert_eq!(line.summary, summary);
    }

    /// **Property 5: Lines Without a Separator Are Rejected**
    #[test]
    fn test_missing_separator_rejected(raw in "[A-Za-z][A-Za-z0-9 ]{0,30}") {
        let result = dsl::parse_line(1, &raw);
        let is_malformed = matches!(result, Err(jira_util_core::Error::MalformedLine { .. }));
        prop_assert!(is_malformed);
    }
}
