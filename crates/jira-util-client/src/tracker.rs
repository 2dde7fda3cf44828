// Rust guideline compliant 2026-10-18

//! `Tracker` implementation over the REST and agile endpoints.

use crate::http::HttpTracker;
use jira_util_core::{BacklogPosition, Error, Issue, IssueKey, Result, Sprint, Tracker};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct IssuePage {
    #[serde(default)]
    total: usize,
    #[serde(default)]
    issues: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
struct SprintPage {
    #[serde(default)]
    values: Vec<Sprint>,
}

impl HttpTracker {
    fn backlog_page(
        &self,
        board_id: &str,
        start_at: usize,
        max_results: usize,
    ) -> Result<IssuePage> {
        let value = self.request(
            Method::GET,
            &format!("/rest/agile/1.0/board/{}/backlog", board_id),
            &[
                ("startAt", start_at.to_string()),
                ("maxResults", max_results.to_string()),
                ("fields", "key".to_string()),
            ],
            None,
        )?;
        Ok(serde_json::from_value(value)?)
    }

    /// Finds the backlog issue to rank against, skipping `key` itself.
    ///
    /// Only the two issues at the relevant end of the backlog are fetched.
    fn backlog_anchor(
        &self,
        key: &IssueKey,
        board_id: &str,
        position: BacklogPosition,
    ) -> Result<Option<IssueKey>> {
        let start_at = match position {
            BacklogPosition::BeforeFirst => 0,
            BacklogPosition::AfterLast => {
                let total = self.backlog_page(board_id, 0, 0)?.total;
                total.saturating_sub(2)
            }
        };
        let mut candidates = self
            .backlog_page(board_id, start_at, 2)?
            .issues
            .into_iter()
            .map(|issue| issue.key)
            .filter(|candidate| candidate != key);

        Ok(match position {
            BacklogPosition::BeforeFirst => candidates.next(),
            BacklogPosition::AfterLast => candidates.last(),
        })
    }
}

impl Tracker for HttpTracker {
    fn create_issue(&self, body: &Value) -> Result<IssueKey> {
        let url = format!("{}/rest/api/2/issue", self.base_url());
        let response = self.request(Method::POST, "/rest/api/2/issue", &[], Some(body))?;
        response
            .get("key")
            .and_then(Value::as_str)
            .map(IssueKey::from)
            .ok_or_else(|| Error::TransportFailure {
                method: "POST".to_string(),
                url,
                message: format!("Response has no issue key: {}", response),
            })
    }

    fn get_issue(&self, key: &IssueKey) -> Result<Value> {
        self.request(Method::GET, &format!("/rest/api/2/issue/{}", key), &[], None)
    }

    fn update_issue(&self, key: &IssueKey, body: &Value) -> Result<()> {
        self.request(
            Method::PUT,
            &format!("/rest/api/2/issue/{}", key),
            &[],
            Some(body),
        )?;
        Ok(())
    }

    fn search(&self, jql: &str, fields: &[&str], max_results: u32) -> Result<Vec<Issue>> {
        let value = self.request(
            Method::GET,
            "/rest/api/2/search",
            &[
                ("jql", jql.to_string()),
                ("fields", fields.join(",")),
                ("maxResults", max_results.to_string()),
            ],
            None,
        )?;
        let page: IssuePage = serde_json::from_value(value)?;
        Ok(page.issues)
    }

    fn future_sprints(&self, board_id: &str) -> Result<Vec<Sprint>> {
        let value = self.request(
            Method::GET,
            &format!("/rest/agile/1.0/board/{}/sprint", board_id),
            &[("state", "future".to_string())],
            None,
        )?;
        let page: SprintPage = serde_json::from_value(value)?;
        Ok(page.values)
    }

    fn rank_backlog(
        &self,
        key: &IssueKey,
        board_id: &str,
        position: BacklogPosition,
    ) -> Result<()> {
        let anchor = self.backlog_anchor(key, board_id, position)?;
        debug!(key = %key, board_id, ?position, anchor = ?anchor, "ranking in backlog");

        let mut body = json!({ "issues": [key] });
        if let Some(anchor) = anchor {
            let field = match position {
                BacklogPosition::BeforeFirst => "rankBeforeIssue",
                BacklogPosition::AfterLast => "rankAfterIssue",
            };
            body[field] = json!(anchor);
        }

        self.request(
            Method::POST,
            &format!("/rest/agile/1.0/backlog/{}/issue", board_id),
            &[],
            Some(&body),
        )?;
        Ok(())
    }
}
