// Rust guideline compliant 2026-10-18

//! Implementation of the `jira-util epics` command.

use crate::context::GlobalOptions;
use crate::output::OutputFormatter;
use anyhow::Result;
use jira_util_core::active_epics;

/// Lists the epics of a project.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `project` - Project key overriding the configured default
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the search
/// fails.
pub fn execute(
    options: &GlobalOptions,
    project: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let session = options.connect()?;
    let project = project.unwrap_or_else(|| session.env.project.clone());
    let epics = active_epics(&session.tracker, &project)?;
    println!("{}", formatter.format_epics(&epics));
    Ok(())
}
