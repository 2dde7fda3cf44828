// Rust guideline compliant 2026-10-18

//! Core data models for jira-util.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of ticket named by an input line.
///
/// `Story`, `Task`, `Spike` and `Bug` are the regular kinds and share the
/// same field composition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// Top-level grouping container above epics.
    Deliverable,
    /// Mid-level container grouping regular tickets.
    Epic,
    /// User-facing unit of work.
    Story,
    /// Technical unit of work.
    Task,
    /// Time-boxed investigation.
    Spike,
    /// Defect to fix.
    Bug,
}

impl IssueKind {
    /// The regular kinds, in display order.
    pub const REGULAR: [IssueKind; 4] = [
        IssueKind::Story,
        IssueKind::Task,
        IssueKind::Spike,
        IssueKind::Bug,
    ];

    /// Returns the issue type name the tracker knows this kind by.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Deliverable => "Deliverable",
            IssueKind::Epic => "Epic",
            IssueKind::Story => "Story",
            IssueKind::Task => "Task",
            IssueKind::Spike => "Spike",
            IssueKind::Bug => "Bug",
        }
    }

    /// Whether this is a schedulable work item (Story/Task/Spike/Bug).
    pub fn is_regular(&self) -> bool {
        match self {
            IssueKind::Deliverable | IssueKind::Epic => false,
            IssueKind::Story | IssueKind::Task | IssueKind::Spike | IssueKind::Bug => true,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "Deliverable" => Ok(IssueKind::Deliverable),
            "Epic" => Ok(IssueKind::Epic),
            "Story" => Ok(IssueKind::Story),
            "Task" => Ok(IssueKind::Task),
            "Spike" => Ok(IssueKind::Spike),
            "Bug" => Ok(IssueKind::Bug),
            _ => Err(crate::Error::InvalidIssueKind(s.to_string())),
        }
    }
}

/// Issue-tracker key such as `MAR-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueKey(String);

impl IssueKey {
    /// Wraps a key string without validating it.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IssueKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for IssueKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One parsed unit of input: `<Kind>: <summary>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source.
    pub number: usize,
    /// Issue kind named by the line.
    pub kind: IssueKind,
    /// Summary text after the separator.
    pub summary: String,
}

/// Whether a summary names an existing ticket or asks for a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketRef {
    /// The summary starts with this existing ticket key.
    Existing(IssueKey),
    /// No key prefix; a ticket must be created.
    ToCreate,
}

/// Parent/epic memory threaded through a hierarchy walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyContext {
    /// Most recent deliverable seen in the input.
    pub current_deliverable: Option<IssueKey>,
    /// Most recent epic seen in the input.
    pub current_epic: Option<IssueKey>,
}

impl HierarchyContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose epic slot is pre-filled.
    pub fn with_epic(epic: Option<IssueKey>) -> Self {
        Self {
            current_deliverable: None,
            current_epic: epic,
        }
    }
}

/// Where a new regular ticket should be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SprintPosition {
    /// Earliest future sprint on the board.
    NextSprint,
    /// First position in the backlog.
    TopOfBacklog,
    /// Last position in the backlog.
    BottomOfBacklog,
}

impl SprintPosition {
    /// All positions, in display order.
    pub const ALL: [SprintPosition; 3] = [
        SprintPosition::NextSprint,
        SprintPosition::TopOfBacklog,
        SprintPosition::BottomOfBacklog,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SprintPosition::NextSprint => "next sprint",
            SprintPosition::TopOfBacklog => "top of backlog",
            SprintPosition::BottomOfBacklog => "bottom of backlog",
        }
    }
}

impl fmt::Display for SprintPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Backlog ranking instruction applied after a ticket is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogPosition {
    /// Rank before the first backlog issue.
    BeforeFirst,
    /// Rank after the last backlog issue.
    AfterLast,
}

/// Outcome of resolving a [`SprintPosition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprintResolution {
    /// Place the ticket into this sprint at creation time.
    IterationId(u64),
    /// No future sprint exists; the ticket stays unscheduled.
    NoActiveIteration,
    /// No sprint field; rank the ticket in the backlog after creation.
    Deferred(BacklogPosition),
}

/// A sprint as listed by the agile board API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// Sprint id.
    pub id: u64,
    /// Sprint display name.
    #[serde(default)]
    pub name: String,
    /// Sprint state (`future`, `active`, `closed`).
    #[serde(default)]
    pub state: String,
}

/// An issue as returned by search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key.
    pub key: IssueKey,
    /// Raw field values keyed by field id.
    #[serde(default)]
    pub fields: serde_json::Value,
}

impl Issue {
    /// Returns the summary field, if present.
    pub fn summary(&self) -> Option<&str> {
        self.fields.get("summary").and_then(serde_json::Value::as_str)
    }
}

/// Whether the walker created a ticket or reused an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A new ticket was created.
    Created,
    /// The line referenced an existing ticket.
    Found,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created => f.write_str("Created"),
            Outcome::Found => f.write_str("Found"),
        }
    }
}

/// Structured progress record emitted for each processed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressRecord {
    /// Created or found.
    pub outcome: Outcome,
    /// Issue kind of the line.
    pub kind: IssueKind,
    /// Key of the ticket the line resolved to.
    pub key: IssueKey,
    /// Parent context after processing the line: the deliverable for
    /// epics, the epic for regular tickets.
    pub parent: Option<IssueKey>,
}
