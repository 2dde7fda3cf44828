// Rust guideline compliant 2026-10-18

//! Implementation of the `jira-util create` command.

use crate::commands::Placement;
use crate::context::GlobalOptions;
use crate::output::OutputFormatter;
use crate::terminal::print_warning;
use anyhow::Result;
use jira_util_core::{create_ticket, ComposeOptions, HierarchyContext, IssueKey, IssueKind};

/// Arguments of a single ticket creation.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Ticket summary.
    pub summary: String,
    /// Description; defaults to the summary.
    pub description: Option<String>,
    /// Issue kind name; defaults to `Story`.
    pub issue_type: Option<String>,
    /// Epic to file a regular ticket under.
    pub epic: Option<String>,
    /// Project key overriding the configured default.
    pub project: Option<String>,
    /// Sprint or backlog placement.
    pub placement: Option<Placement>,
}

/// Resolves the issue kind, defaulting to `Story`.
///
/// # Errors
///
/// Returns an error for an unknown kind name.
pub fn parse_kind(issue_type: Option<&str>) -> Result<IssueKind> {
    Ok(issue_type.unwrap_or("Story").parse::<IssueKind>()?)
}

/// Creates one ticket and prints its browse URL.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `args` - Ticket fields and placement
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if:
/// - The issue kind is unknown
/// - A required field id is not configured
/// - A tracker request fails
pub fn execute(
    options: &GlobalOptions,
    args: CreateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let kind = parse_kind(args.issue_type.as_deref())?;
    if args.epic.is_some() && !kind.is_regular() {
        print_warning(
            &format!("--epic is ignored for {} tickets", kind),
            options.use_color,
        );
    }

    let session = options.connect()?;
    let composer = session.composer()?;
    let context = HierarchyContext::with_epic(args.epic.map(IssueKey::new));
    let compose_options = ComposeOptions {
        project: args.project,
        description: args.description,
        placement: args.placement.map(Into::into),
    };

    let key = create_ticket(
        &session.tracker,
        &composer,
        kind,
        &args.summary,
        &context,
        &compose_options,
    )?;
    println!(
        "{}",
        formatter.format_created(&key, &session.tracker.browse_url(&key))
    );
    Ok(())
}
