//! Compression of a committed grid into per-column and merged timelines.

use crate::models::{Person, SummaryEntry, TimelineBlock};
use crate::policy::StaffingPolicy;
use crate::scheduler::{ScheduleGrid, Status};

/// One `SummaryEntry` per column, listing scheduled people in person order.
pub fn process_data<P>(people: &[Person], grid: &ScheduleGrid, policy: &P) -> Vec<SummaryEntry>
where
    P: StaffingPolicy + ?Sized,
{
    grid.columns()
        .iter()
        .enumerate()
        .map(|(col, column)| {
            let ids: Vec<String> = people
                .iter()
                .enumerate()
                .filter(|(row, _)| grid.status(*row, col) == Status::Scheduled)
                .map(|(_, person)| person.id.clone())
                .collect();
            let required = i64::from(policy.required_headcount(column.is_night, column.phase));
            SummaryEntry {
                start_date: column.start_date,
                end_date: column.end_date,
                is_night: column.is_night,
                phase: column.phase.to_string(),
                people_left: required - ids.len() as i64,
                ids,
            }
        })
        .collect()
}

/// Whether `entry` can extend `block`: same people in the same order, same phase.
fn is_connected(block: &TimelineBlock, entry: &SummaryEntry) -> bool {
    block.ids == entry.ids && block.phase == entry.phase
}

/// Merge consecutive entries with identical `ids` and `phase` into blocks.
///
/// A merged block spans from the first entry's start to the last entry's
/// end and is night if any merged entry is. Every other field, including
/// `people_left`, is the first entry's.
pub fn simplify_grid(entries: &[SummaryEntry]) -> Vec<TimelineBlock> {
    let mut blocks: Vec<TimelineBlock> = Vec::new();
    for entry in entries {
        match blocks.last_mut() {
            Some(block) if is_connected(block, entry) => {
                block.end_date = entry.end_date;
                block.is_night |= entry.is_night;
            }
            _ => blocks.push(TimelineBlock::from(entry)),
        }
    }
    blocks
}
