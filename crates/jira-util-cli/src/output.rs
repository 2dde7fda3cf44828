// Rust guideline compliant 2026-10-18

//! Output formatting module for the jira-util CLI.
//!
//! This module provides functionality for formatting tracker data
//! as JSON envelopes or human-readable text.

use jira_util_client::{ErrorEnvelope, SuccessEnvelope};
use jira_util_core::{Error, Issue, IssueKey, ProgressRecord, WalkSummary};
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting command results in different
/// output formats.
pub trait OutputFormatter {
    /// Formats a raw issue as returned by the tracker.
    fn format_issue(&self, issue: &Value) -> String;

    /// Formats a list of epics.
    fn format_epics(&self, epics: &[Issue]) -> String;

    /// Formats the comment listing of a ticket.
    fn format_comments(&self, key: &IssueKey, comments: &Value) -> String;

    /// Formats a newly created ticket.
    fn format_created(&self, key: &IssueKey, url: &str) -> String;

    /// Formats the outcome of a hierarchy walk.
    fn format_walk(&self, records: &[ProgressRecord], summary: WalkSummary) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}

fn walk_counts(summary: WalkSummary) -> Value {
    json!({
        "created": summary.created,
        "found": summary.found,
        "linked": summary.linked,
    })
}

/// JSON output formatter.
///
/// Wraps results in `{"status": "ok", "result": ...}` envelopes.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_issue(&self, issue: &Value) -> String {
        to_pretty(&SuccessEnvelope::new(issue))
    }

    fn format_epics(&self, epics: &[Issue]) -> String {
        to_pretty(&SuccessEnvelope::new(json!({
            "epics": epics,
            "total": epics.len(),
        })))
    }

    fn format_comments(&self, key: &IssueKey, comments: &Value) -> String {
        to_pretty(&SuccessEnvelope::new(json!({
            "key": key,
            "comments": comments.get("comments").cloned().unwrap_or_else(|| json!([])),
        })))
    }

    fn format_created(&self, key: &IssueKey, url: &str) -> String {
        to_pretty(&SuccessEnvelope::new(json!({ "key": key, "url": url })))
    }

    fn format_walk(&self, records: &[ProgressRecord], summary: WalkSummary) -> String {
        let mut result = walk_counts(summary);
        result["tickets"] = json!(records);
        to_pretty(&SuccessEnvelope::new(result))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match error.downcast_ref::<Error>() {
            Some(core) => to_pretty(&ErrorEnvelope::from_error(core)),
            None => to_pretty(&json!({
                "code": "unknown",
                "message": format!("{:#}", error),
            })),
        }
    }
}

/// Human-readable output formatter.
///
/// Lists render as tables; single results as plain lines.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_issue(&self, issue: &Value) -> String {
        to_pretty(issue)
    }

    fn format_epics(&self, epics: &[Issue]) -> String {
        if epics.is_empty() {
            return "No epics found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Key".to_string(), "Summary".to_string()]);
        for epic in epics {
            builder.push_record(vec![
                epic.key.to_string(),
                epic.summary().unwrap_or_default().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_comments(&self, key: &IssueKey, comments: &Value) -> String {
        let entries = comments
            .get("comments")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        if entries.is_empty() {
            return format!("No comments on {}.", key);
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "Id".to_string(),
            "Author".to_string(),
            "Created".to_string(),
            "Body".to_string(),
        ]);
        for comment in &entries {
            let text = |pointer: &str| {
                comment
                    .pointer(pointer)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            builder.push_record(vec![
                text("/id"),
                text("/author/displayName"),
                text("/created"),
                text("/body"),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_created(&self, _key: &IssueKey, url: &str) -> String {
        url.to_string()
    }

    fn format_walk(&self, _records: &[ProgressRecord], summary: WalkSummary) -> String {
        format!(
            "Created {}, found {}, linked {}",
            summary.created, summary.found, summary.linked
        )
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let mut buffer = if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{:#}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether JSON output was requested
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(json: bool, use_color: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new(use_color))
    }
}
