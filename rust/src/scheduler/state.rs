//! Working state owned by one scheduling run.

use crate::models::Person;

use super::grid::ScheduleGrid;

/// Per-column staffing bookkeeping.
///
/// `satisfied` is the "graveyard": once a column reaches its required
/// headcount the flag is set and never cleared for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLedger {
    pub required: Vec<u32>,
    pub committed: Vec<u32>,
    pub satisfied: Vec<bool>,
}

impl ColumnLedger {
    pub fn new(required: Vec<u32>, committed: Vec<u32>) -> Self {
        let satisfied = required
            .iter()
            .zip(&committed)
            .map(|(req, done)| done >= req)
            .collect();
        Self {
            required,
            committed,
            satisfied,
        }
    }

    /// People still needed in `col`.
    #[inline]
    pub fn remaining(&self, col: usize) -> u32 {
        self.required[col].saturating_sub(self.committed[col])
    }

    #[inline]
    pub fn is_satisfied(&self, col: usize) -> bool {
        self.satisfied[col]
    }

    /// Count one more commitment in `col`.
    ///
    /// Returns true if this commitment is the one that satisfied the column.
    pub fn record_commit(&mut self, col: usize) -> bool {
        self.committed[col] += 1;
        if !self.satisfied[col] && self.committed[col] >= self.required[col] {
            self.satisfied[col] = true;
            return true;
        }
        false
    }
}

/// Grid, people and ledger, exclusively owned for the duration of a run.
#[derive(Debug, Clone)]
pub struct SchedulerState {
    pub grid: ScheduleGrid,
    pub people: Vec<Person>,
    pub ledger: ColumnLedger,
}

impl SchedulerState {
    pub fn new(grid: ScheduleGrid, people: Vec<Person>, ledger: ColumnLedger) -> Self {
        Self {
            grid,
            people,
            ledger,
        }
    }
}
