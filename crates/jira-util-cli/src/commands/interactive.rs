// Rust guideline compliant 2026-10-18

//! Implementation of the `jira-util interactive` command.
//!
//! Prompts for an epic, a kind, a placement and a title, then creates
//! the ticket.

use crate::context::GlobalOptions;
use crate::output::OutputFormatter;
use crate::terminal::print_info;
use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use jira_util_core::{
    active_epics, create_ticket, ComposeOptions, HierarchyContext, IssueKind, SprintPosition,
};

/// Runs the interactive creation prompts.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the project has no epics, a prompt is aborted,
/// or a tracker request fails.
pub fn execute(options: &GlobalOptions, formatter: &dyn OutputFormatter) -> Result<()> {
    let session = options.connect()?;
    let composer = session.composer()?;
    print_info("Interactive ticket creation", options.use_color);

    let epics = active_epics(&session.tracker, composer.project())?;
    if epics.is_empty() {
        bail!("No epics found in project {}", composer.project());
    }
    let epic_labels: Vec<String> = epics
        .iter()
        .map(|epic| format!("{} {}", epic.key, epic.summary().unwrap_or_default()))
        .collect();
    let epic = Select::new()
        .with_prompt("Select an Epic")
        .items(&epic_labels)
        .default(0)
        .interact()?;

    let kind_labels: Vec<&str> = IssueKind::REGULAR.iter().map(IssueKind::as_str).collect();
    let kind = Select::new()
        .with_prompt("Select an Issue Type")
        .items(&kind_labels)
        .default(0)
        .interact()?;

    let position_labels: Vec<&str> = SprintPosition::ALL
        .iter()
        .map(SprintPosition::label)
        .collect();
    let position = Select::new()
        .with_prompt("Select a Sprint (Location)")
        .items(&position_labels)
        .default(0)
        .interact()?;

    let title: String = Input::new()
        .with_prompt("Enter Title")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Title cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let key = create_ticket(
        &session.tracker,
        &composer,
        IssueKind::REGULAR[kind],
        title.trim(),
        &HierarchyContext::with_epic(Some(epics[epic].key.clone())),
        &ComposeOptions {
            placement: Some(SprintPosition::ALL[position]),
            ..ComposeOptions::default()
        },
    )?;
    println!(
        "{}",
        formatter.format_created(&key, &session.tracker.browse_url(&key))
    );
    Ok(())
}
