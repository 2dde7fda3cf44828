// Rust guideline compliant 2026-10-18

//! Sprint and backlog placement for new regular tickets.

use crate::models::{BacklogPosition, SprintPosition, SprintResolution};
use crate::tracker::Tracker;
use crate::Result;
use tracing::debug;

/// Resolves a requested placement against a board.
///
/// `NextSprint` takes the first future sprint in the order the tracker
/// returns them. Backlog positions resolve to a ranking instruction that
/// is applied after creation.
///
/// # Arguments
///
/// * `tracker` - Tracker used for the sprint lookup
/// * `position` - Requested placement
/// * `board_id` - Agile board id
///
/// # Errors
///
/// Returns an error if the sprint lookup fails.
pub fn resolve<T: Tracker + ?Sized>(
    tracker: &T,
    position: SprintPosition,
    board_id: &str,
) -> Result<SprintResolution> {
    match position {
        SprintPosition::NextSprint => {
            let sprints = tracker.future_sprints(board_id)?;
            match sprints.first() {
                Some(sprint) => {
                    debug!(board_id, sprint_id = sprint.id, name = %sprint.name, "next sprint");
                    Ok(SprintResolution::IterationId(sprint.id))
                }
                None => {
                    debug!(board_id, "no future sprint; ticket stays unscheduled");
                    Ok(SprintResolution::NoActiveIteration)
                }
            }
        }
        SprintPosition::TopOfBacklog => {
            Ok(SprintResolution::Deferred(BacklogPosition::BeforeFirst))
        }
        SprintPosition::BottomOfBacklog => {
            Ok(SprintResolution::Deferred(BacklogPosition::AfterLast))
        }
    }
}
