// Rust guideline compliant 2026-10-18

//! Implementation of the `jira-util get` command.

use crate::context::GlobalOptions;
use crate::output::OutputFormatter;
use anyhow::Result;
use jira_util_core::{IssueKey, Tracker};

/// Prints one ticket as returned by the tracker.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `key` - Ticket key
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the tracker
/// request fails.
pub fn execute(
    options: &GlobalOptions,
    key: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let session = options.connect()?;
    let issue = session.tracker.get_issue(&IssueKey::new(key))?;
    println!("{}", formatter.format_issue(&issue));
    Ok(())
}
