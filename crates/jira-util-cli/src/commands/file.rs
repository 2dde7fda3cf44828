// Rust guideline compliant 2026-10-18

//! Implementation of the `jira-util file` command.
//!
//! Provisions a whole ticket hierarchy from a description file.

use crate::commands::Placement;
use crate::context::GlobalOptions;
use crate::output::OutputFormatter;
use crate::progress::ProgressPrinter;
use anyhow::{Context, Result};
use jira_util_core::{HierarchyWalker, WalkOptions};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Opens the description, `-` meaning stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("Cannot open {}", path))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Walks a hierarchy description against the tracker.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `path` - Description file, or `-` for stdin
/// * `verbose` - Print one line per ticket as it is processed
/// * `project` - Project key overriding the configured default
/// * `placement` - Sprint or backlog placement for new regular tickets
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Stops at the first malformed line, unknown kind, or tracker failure.
/// Tickets created before the failure are kept.
pub fn execute(
    options: &GlobalOptions,
    path: String,
    verbose: bool,
    project: Option<String>,
    placement: Option<Placement>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let input = open_input(&path)?;
    let session = options.connect()?;
    let composer = session.composer()?;
    let printer = ProgressPrinter::new(options.use_color);
    let show_progress = verbose && !options.json;

    let mut records = Vec::new();
    let mut walker = HierarchyWalker::new(
        &session.tracker,
        &composer,
        WalkOptions {
            project,
            placement: placement.map(Into::into),
        },
    );
    let summary = walker.run(input, |record| {
        if show_progress {
            printer.print(record, &session.tracker.browse_url(&record.key));
        }
        records.push(record.clone());
    })?;

    println!("{}", formatter.format_walk(&records, summary));
    Ok(())
}
