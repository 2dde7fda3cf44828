// Rust guideline compliant 2026-10-18

//! Single-ticket provisioning: compose, create, then apply follow-ups.

use crate::compose::{ComposeOptions, FieldComposer};
use crate::models::{HierarchyContext, IssueKey, IssueKind};
use crate::tracker::Tracker;
use crate::Result;
use tracing::info;

/// Creates one ticket and applies the follow-up calls its request implies.
///
/// Follow-ups run in order: the parent link (epics under a deliverable),
/// then the backlog ranking (regular tickets placed at the top or bottom
/// of the backlog).
///
/// # Arguments
///
/// * `tracker` - Tracker to create the ticket in
/// * `composer` - Composer holding the static field configuration
/// * `kind` - Issue kind
/// * `summary` - Ticket summary
/// * `context` - Current deliverable/epic context
/// * `options` - Per-call overrides
///
/// # Returns
///
/// The key of the new ticket.
///
/// # Errors
///
/// Returns the first tracker error; tickets created before it are left as-is.
pub fn create_ticket<T: Tracker + ?Sized>(
    tracker: &T,
    composer: &FieldComposer,
    kind: IssueKind,
    summary: &str,
    context: &HierarchyContext,
    options: &ComposeOptions,
) -> Result<IssueKey> {
    let request = composer.compose(tracker, kind, summary, context, options)?;
    let key = tracker.create_issue(&request.to_body())?;
    info!(key = %key, kind = %kind, "created ticket");

    if let Some(parent) = &request.parent_link {
        tracker.update_issue(&key, &composer.parent_link_body(parent))?;
        info!(key = %key, parent = %parent, "linked to parent");
    }

    if let Some(position) = request.backlog_rank {
        tracker.rank_backlog(&key, composer.board_id(), position)?;
        info!(key = %key, ?position, "ranked in backlog");
    }

    Ok(key)
}
