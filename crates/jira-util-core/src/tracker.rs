// Rust guideline compliant 2026-10-18

//! The issue-tracker boundary used by the provisioning engine.
//!
//! Implementations perform authenticated, blocking calls and map failures
//! onto [`crate::Error::RemoteRejected`] (4xx with a payload) or
//! [`crate::Error::TransportFailure`] (no usable response). The engine never
//! sees credentials.

use crate::models::{BacklogPosition, Issue, IssueKey, Sprint};
use crate::Result;
use serde_json::Value;

/// Operations the provisioning engine needs from an issue tracker.
pub trait Tracker {
    /// Creates an issue from a `{"fields": {...}}` body and returns its key.
    fn create_issue(&self, body: &Value) -> Result<IssueKey>;

    /// Fetches the full JSON representation of an issue.
    fn get_issue(&self, key: &IssueKey) -> Result<Value>;

    /// Applies a `{"fields": {...}}` update to an existing issue.
    fn update_issue(&self, key: &IssueKey, body: &Value) -> Result<()>;

    /// Runs a JQL search.
    fn search(&self, jql: &str, fields: &[&str], max_results: u32) -> Result<Vec<Issue>>;

    /// Lists future sprints of a board in the tracker's order.
    fn future_sprints(&self, board_id: &str) -> Result<Vec<Sprint>>;

    /// Ranks an issue at the top or bottom of a board's backlog.
    fn rank_backlog(&self, key: &IssueKey, board_id: &str, position: BacklogPosition)
        -> Result<()>;
}

/// Lists the epics of a project.
///
/// # Arguments
///
/// * `tracker` - The tracker to query
/// * `project` - Project key
///
/// # Returns
///
/// Up to 100 epics with their `key` and `summary` fields.
///
/// # Errors
///
/// Returns an error if the search call fails.
pub fn active_epics<T: Tracker + ?Sized>(tracker: &T, project: &str) -> Result<Vec<Issue>> {
    let jql = format!("issuetype = Epic AND project = {}", project);
    tracker.search(&jql, &["key", "summary"], 100)
}
