// Rust guideline compliant 2026-10-18

//! Per-ticket progress lines for hierarchy walks.

use crate::terminal::color_choice;
use jira_util_core::{IssueKind, Outcome, ProgressRecord};
use std::io::Write;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Indentation mirrors the ticket's level in the hierarchy.
fn indent(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::Deliverable => "",
        IssueKind::Epic => "\t",
        IssueKind::Story | IssueKind::Task | IssueKind::Spike | IssueKind::Bug => "\t\t",
    }
}

/// Text after the outcome word, e.g. `Story <url>, epic is MAR-2`.
fn detail(record: &ProgressRecord, url: &str) -> String {
    let mut line = format!("{} {}", record.kind, url);
    match record.kind {
        IssueKind::Deliverable => {}
        IssueKind::Epic => {
            if let Some(parent) = &record.parent {
                line.push_str(&format!(", deliverable is {}", parent));
            }
        }
        IssueKind::Story | IssueKind::Task | IssueKind::Spike | IssueKind::Bug => {
            match &record.parent {
                Some(epic) => line.push_str(&format!(", epic is {}", epic)),
                None => line.push_str(", no epic"),
            }
        }
    }
    line
}

/// Renders one progress line without color.
///
/// # Arguments
///
/// * `record` - The processed ticket
/// * `url` - Browse URL of the ticket
pub fn describe(record: &ProgressRecord, url: &str) -> String {
    format!("{}{} {}", indent(record.kind), record.outcome, detail(record, url))
}

/// Prints progress lines to stdout as tickets are processed.
pub struct ProgressPrinter {
    use_color: bool,
}

impl ProgressPrinter {
    /// Creates a new progress printer.
    ///
    /// # Arguments
    ///
    /// * `use_color` - Whether to color the outcome word
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Prints one record.
    pub fn print(&self, record: &ProgressRecord, url: &str) {
        if !self.use_color {
            println!("{}", describe(record, url));
            return;
        }

        let color = match record.outcome {
            Outcome::Created => Color::Green,
            Outcome::Found => Color::Cyan,
        };
        let mut stdout = StandardStream::stdout(color_choice(true));
        let _ = write!(stdout, "{}", indent(record.kind));
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(stdout, "{}", record.outcome);
        let _ = stdout.reset();
        let _ = writeln!(stdout, " {}", detail(record, url));
    }
}
