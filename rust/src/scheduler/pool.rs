//! Candidate pool construction.

use crate::policy::StaffingPolicy;

use super::grid::ScheduleGrid;
use super::state::ColumnLedger;

/// A reference to an open cell, with its weight for the current iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub weight: f64,
}

impl Candidate {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            weight: 1.0,
        }
    }
}

/// Scan the grid once and collect every open cell in a column that still
/// needs people.
///
/// Columns whose scheduled count already meets the requirement come back
/// marked satisfied and contribute no candidates.
pub fn build_candidate_pool<P>(grid: &ScheduleGrid, policy: &P) -> (Vec<Candidate>, ColumnLedger)
where
    P: StaffingPolicy + ?Sized,
{
    let required: Vec<u32> = grid
        .columns()
        .iter()
        .map(|c| policy.required_headcount(c.is_night, c.phase))
        .collect();
    let ledger = ColumnLedger::new(required, grid.scheduled_per_column());

    let mut pool = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if !ledger.is_satisfied(col) && grid.status(row, col).is_open() {
                pool.push(Candidate::new(row, col));
            }
        }
    }

    (pool, ledger)
}
