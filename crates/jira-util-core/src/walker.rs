// Rust guideline compliant 2026-10-18

//! Hierarchy walker: provisions a ticket tree from the line description.
//!
//! Lines are processed strictly in order. A `Deliverable` line fills the
//! deliverable slot of the context, an `Epic` line fills the epic slot, and
//! regular lines read the epic slot. Existing tickets (summaries starting
//! with a key) are never modified beyond re-linking them to the current
//! deliverable or epic.

use crate::compose::{ComposeOptions, FieldComposer};
use crate::dsl;
use crate::models::{
    HierarchyContext, IssueKey, IssueKind, Line, Outcome, ProgressRecord, SprintPosition,
    TicketRef,
};
use crate::provision::create_ticket;
use crate::reference::recognize;
use crate::tracker::Tracker;
use crate::Result;
use std::io::BufRead;
use tracing::{debug, info};

/// Options applied to every ticket created during a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Project key overriding the configured default.
    pub project: Option<String>,
    /// Sprint or backlog placement for new regular tickets.
    pub placement: Option<SprintPosition>,
}

/// Counters for a completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Tickets created.
    pub created: usize,
    /// Lines that referenced existing tickets.
    pub found: usize,
    /// Parent and epic link updates issued.
    pub linked: usize,
}

/// Walks a hierarchy description against a tracker.
pub struct HierarchyWalker<'a, T: Tracker + ?Sized> {
    tracker: &'a T,
    composer: &'a FieldComposer,
    options: ComposeOptions,
    context: HierarchyContext,
    summary: WalkSummary,
}

impl<'a, T: Tracker + ?Sized> HierarchyWalker<'a, T> {
    /// Creates a walker with an empty context.
    pub fn new(tracker: &'a T, composer: &'a FieldComposer, options: WalkOptions) -> Self {
        Self {
            tracker,
            composer,
            options: ComposeOptions {
                project: options.project,
                description: None,
                placement: options.placement,
            },
            context: HierarchyContext::new(),
            summary: WalkSummary::default(),
        }
    }

    /// Current deliverable/epic context.
    pub fn context(&self) -> &HierarchyContext {
        &self.context
    }

    /// Counters accumulated so far.
    pub fn summary(&self) -> WalkSummary {
        self.summary
    }

    /// Processes every line of the input.
    ///
    /// # Arguments
    ///
    /// * `input` - The hierarchy description
    /// * `on_progress` - Called once per ticket line, after it is processed
    ///
    /// # Returns
    ///
    /// Counters for the whole walk.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed line, unknown kind, or tracker failure.
    /// Tickets created before the failure stay in the tracker.
    pub fn run<R, F>(&mut self, input: R, mut on_progress: F) -> Result<WalkSummary>
    where
        R: BufRead,
        F: FnMut(&ProgressRecord),
    {
        for line in dsl::lines(input) {
            let record = self.process_line(&line?)?;
            on_progress(&record);
        }
        Ok(self.summary)
    }

    /// Processes one parsed line.
    ///
    /// # Errors
    ///
    /// Returns an error if a tracker call fails.
    pub fn process_line(&mut self, line: &Line) -> Result<ProgressRecord> {
        let (key, outcome) = match recognize(&line.summary) {
            TicketRef::Existing(key) => {
                debug!(line = line.number, key = %key, "existing ticket");
                self.summary.found += 1;
                (key, Outcome::Found)
            }
            TicketRef::ToCreate => {
                let key = create_ticket(
                    self.tracker,
                    self.composer,
                    line.kind,
                    &line.summary,
                    &self.context,
                    &self.options,
                )?;
                self.summary.created += 1;
                (key, Outcome::Created)
            }
        };

        let parent = match line.kind {
            IssueKind::Deliverable => {
                self.context.current_deliverable = Some(key.clone());
                None
            }
            IssueKind::Epic => {
                if let Some(deliverable) = self.context.current_deliverable.clone() {
                    // New epics were linked during creation.
                    if outcome == Outcome::Found {
                        let body = self.composer.parent_link_body(&deliverable);
                        self.link(&key, &body)?;
                        info!(key = %key, parent = %deliverable, "linked existing epic");
                    } else {
                        self.summary.linked += 1;
                    }
                }
                self.context.current_epic = Some(key.clone());
                self.context.current_deliverable.clone()
            }
            IssueKind::Story | IssueKind::Task | IssueKind::Spike | IssueKind::Bug => {
                if outcome == Outcome::Found {
                    if let Some(epic) = self.context.current_epic.clone() {
                        let body = self.composer.epic_link_body(&epic);
                        self.link(&key, &body)?;
                        info!(key = %key, epic = %epic, "filed existing ticket under epic");
                    }
                }
                self.context.current_epic.clone()
            }
        };

        Ok(ProgressRecord {
            outcome,
            kind: line.kind,
            key,
            parent,
        })
    }

    fn link(&mut self, key: &IssueKey, body: &serde_json::Value) -> Result<()> {
        self.tracker.update_issue(key, body)?;
        self.summary.linked += 1;
        Ok(())
    }
}
