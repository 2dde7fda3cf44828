// Rust guideline compliant 2026-10-18

//! jira-util Core Library
//!
//! This crate provides the hierarchical ticket provisioning engine:
//! - Data models (IssueKind, IssueKey, HierarchyContext, SprintPosition)
//! - Line DSL parsing and existing-ticket recognition
//! - Request composition with custom fields and sprint/backlog placement
//! - The tracker boundary trait and the hierarchy walker
//! - Configuration loading and error types

pub mod compose;
pub mod config;
pub mod dsl;
pub mod error;
pub mod models;
pub mod provision;
pub mod reference;
pub mod sprint;
pub mod tracker;
pub mod walker;

pub use compose::{ComposeOptions, FieldComposer, TicketRequest};
pub use config::{AuthScheme, Config, EnvironmentConfig, DEFAULT_ENVIRONMENT};
pub use error::{Error, ErrorCode, Result};
pub use models::{
    BacklogPosition, HierarchyContext, Issue, IssueKey, IssueKind, Line, Outcome,
    ProgressRecord, Sprint, SprintPosition, SprintResolution, TicketRef,
};
pub use provision::create_ticket;
pub use reference::recognize;
pub use tracker::{active_epics, Tracker};
pub use walker::{HierarchyWalker, WalkOptions, WalkSummary};
