// Rust guideline compliant 2026-10-18

//! Implementation of `jira-util comments` commands.
//!
//! Supports listing and adding comments on a ticket.

use crate::context::GlobalOptions;
use crate::output::OutputFormatter;
use crate::terminal::print_success;
use anyhow::Result;
use jira_util_core::IssueKey;

/// Lists comments on a ticket.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `key` - Ticket key
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the tracker request fails.
pub fn list(options: &GlobalOptions, key: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let session = options.connect()?;
    let key = IssueKey::new(key);
    let comments = session.tracker.comments(&key)?;
    println!("{}", formatter.format_comments(&key, &comments));
    Ok(())
}

/// Adds a comment to a ticket.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `key` - Ticket key
/// * `body` - Comment text
///
/// # Errors
///
/// Returns an error if the tracker request fails.
pub fn add(options: &GlobalOptions, key: String, body: String) -> Result<()> {
    let session = options.connect()?;
    let key = IssueKey::new(key);
    let comment = session.tracker.add_comment(&key, &body)?;

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "status": "ok",
                "action": "comment_add",
                "key": key,
                "comment": comment,
            }))?
        );
    } else {
        let id = comment.get("id").and_then(|id| id.as_str()).unwrap_or("?");
        print_success(&format!("Added comment {} to {}", id, key), options.use_color);
    }
    Ok(())
}
