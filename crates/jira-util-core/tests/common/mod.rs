// Rust guideline compliant 2026-10-18

//! Shared test support: an in-memory tracker that records every call.

#![allow(dead_code)]

use jira_util_core::{
    BacklogPosition, EnvironmentConfig, Error, FieldComposer, Issue, IssueKey, Result, Sprint,
    Tracker,
};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};

/// One recorded tracker call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Value),
    Get(IssueKey),
    Update(IssueKey, Value),
    Search(String),
    FutureSprints(String),
    Rank(IssueKey, String, BacklogPosition),
}

/// Tracker fake that hands out sequential keys and records calls.
pub struct RecordingTracker {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    sprints: Vec<Sprint>,
    epics: Vec<Issue>,
    fail_on_create: Option<usize>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(100),
            sprints: Vec::new(),
            epics: Vec::new(),
            fail_on_create: None,
        }
    }

    pub fn with_sprints(mut self, ids: &[u64]) -> Self {
        self.sprints = ids
            .iter()
            .map(|id| Sprint {
                id: *id,
                name: format!("Sprint {}", id),
                state: "future".to_string(),
            })
            .collect();
        self
    }

    pub fn with_epics(mut self, epics: &[(&str, &str)]) -> Self {
        self.epics = epics
            .iter()
            .map(|(key, summary)| Issue {
                key: IssueKey::from(*key),
                fields: json!({ "summary": summary }),
            })
            .collect();
        self
    }

    /// Makes the n-th create call (1-based) fail with a 400.
    pub fn failing_on_create(mut self, n: usize) -> Self {
        self.fail_on_create = Some(n);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn creates(&self) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Create(body) => Some(body),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> Vec<(IssueKey, Value)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update(key, body) => Some((key, body)),
                _ => None,
            })
            .collect()
    }

    pub fn ranks(&self) -> Vec<(IssueKey, String, BacklogPosition)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Rank(key, board, position) => Some((key, board, position)),
                _ => None,
            })
            .collect()
    }
}

impl Tracker for RecordingTracker {
    fn create_issue(&self, body: &Value) -> Result<IssueKey> {
        self.calls.borrow_mut().push(Call::Create(body.clone()));
        if Some(self.creates().len()) == self.fail_on_create {
            return Err(Error::RemoteRejected {
                status: 400,
                method: "POST".to_string(),
                url: "https://example.com/rest/api/2/issue".to_string(),
                payload: json!({"errorMessages": ["Invalid input"]}),
            });
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(IssueKey::new(format!("TEST-{}", id)))
    }

    fn get_issue(&self, key: &IssueKey) -> Result<Value> {
        self.calls.borrow_mut().push(Call::Get(key.clone()));
        Ok(json!({ "key": key }))
    }

    fn update_issue(&self, key: &IssueKey, body: &Value) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Update(key.clone(), body.clone()));
        Ok(())
    }

    fn search(&self, jql: &str, _fields: &[&str], _max_results: u32) -> Result<Vec<Issue>> {
        self.calls.borrow_mut().push(Call::Search(jql.to_string()));
        Ok(self.epics.clone())
    }

    fn future_sprints(&self, board_id: &str) -> Result<Vec<Sprint>> {
        self.calls
            .borrow_mut()
            .push(Call::FutureSprints(board_id.to_string()));
        Ok(self.sprints.clone())
    }

    fn rank_backlog(&self, key: &IssueKey, board_id: &str, position: BacklogPosition) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Rank(key.clone(), board_id.to_string(), position));
        Ok(())
    }
}

/// Environment section with every field id the composer needs.
pub fn test_env() -> EnvironmentConfig {
    let mut env = EnvironmentConfig::template();
    env.project = "TEST".to_string();
    env.epic_field = Some("customfield_12345".to_string());
    env.epic_name_field = Some("customfield_54321".to_string());
    env.sprint_field = Some("customfield_67890".to_string());
    env.board_id = Some("999".to_string());
    env.priority = "Medium".to_string();
    env
}

pub fn test_composer() -> FieldComposer {
    FieldComposer::new(&test_env()).expect("test env has all field ids")
}

/// Issue-link update that makes `parent` the initiative of the updated epic.
pub fn initiative_link(parent: &str) -> Value {
    json!({"update": {"issuelinks": [{"add": {
        "type": {"name": "Initiative", "inward": "Parent of", "outward": "Child of"},
        "inwardIssue": {"key": parent}
    }}]}})
}
