// Rust guideline compliant 2026-10-18

//! Command implementations for the jira-util CLI.

pub mod comments;
pub mod create;
pub mod epics;
pub mod file;
pub mod get;
pub mod init;
pub mod interactive;

use jira_util_core::SprintPosition;

/// `--placement` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Placement {
    /// First future sprint of the board
    NextSprint,
    /// Top of the board backlog
    TopOfBacklog,
    /// Bottom of the board backlog
    BottomOfBacklog,
}

impl From<Placement> for SprintPosition {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::NextSprint => SprintPosition::NextSprint,
            Placement::TopOfBacklog => SprintPosition::TopOfBacklog,
            Placement::BottomOfBacklog => SprintPosition::BottomOfBacklog,
        }
    }
}
