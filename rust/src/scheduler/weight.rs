//! Weighting heuristics applied to the candidate pool each iteration.
//!
//! Each pass takes the pool by value and returns it with weights updated.
//! After `weight_reset`, passes only ever add a non-negative bonus, so they
//! compose additively in any order; `PIPELINE` fixes the order used by the
//! scheduler:
//! 1. `weight_reset`: every candidate back to 1.0
//! 2. `weight_balance`: people with fewer committed shifts first
//! 3. `weight_contiguous`: extend existing blocks of time
//! 4. `weight_tough_time`: columns with few open candidates first

use crate::config::SchedulerConfig;
use crate::models::Person;

use super::grid::ScheduleGrid;
use super::pool::Candidate;
use super::state::{ColumnLedger, SchedulerState};

/// Read-only view of the run state needed by the weighting passes.
#[derive(Clone, Copy)]
pub struct WeightContext<'a> {
    pub grid: &'a ScheduleGrid,
    pub people: &'a [Person],
    pub ledger: &'a ColumnLedger,
    pub config: &'a SchedulerConfig,
}

impl<'a> WeightContext<'a> {
    pub fn new(state: &'a SchedulerState, config: &'a SchedulerConfig) -> Self {
        Self {
            grid: &state.grid,
            people: &state.people,
            ledger: &state.ledger,
            config,
        }
    }
}

/// A single weighting pass.
pub type WeightPass = fn(Vec<Candidate>, &WeightContext<'_>) -> Vec<Candidate>;

/// The passes run on every iteration, in order.
pub const PIPELINE: [(&str, WeightPass); 4] = [
    ("reset", weight_reset),
    ("balance", weight_balance),
    ("contiguous", weight_contiguous),
    ("tough_time", weight_tough_time),
];

/// Run every pass of `PIPELINE` over the pool.
pub fn apply_pipeline(pool: Vec<Candidate>, ctx: &WeightContext<'_>) -> Vec<Candidate> {
    PIPELINE
        .iter()
        .fold(pool, |pool, (_, pass)| pass(pool, ctx))
}

/// Set every weight to 1.0.
pub fn weight_reset(mut pool: Vec<Candidate>, _ctx: &WeightContext<'_>) -> Vec<Candidate> {
    for candidate in &mut pool {
        candidate.weight = 1.0;
    }
    pool
}

/// Favor people with fewer committed shifts.
///
/// Bonus is `balance_scale / (1 + total shifts)`, strictly decreasing in the
/// person's shift count.
pub fn weight_balance(mut pool: Vec<Candidate>, ctx: &WeightContext<'_>) -> Vec<Candidate> {
    let scale = ctx.config.balance_scale;
    for candidate in &mut pool {
        let shifts = ctx.people[candidate.row].total_scheduled();
        candidate.weight += scale / (1.0 + f64::from(shifts));
    }
    pool
}

/// Favor cells directly next to a column already scheduled for the same
/// person, one `contiguous_bonus` per scheduled neighbor.
pub fn weight_contiguous(mut pool: Vec<Candidate>, ctx: &WeightContext<'_>) -> Vec<Candidate> {
    let bonus = ctx.config.contiguous_bonus;
    for candidate in &mut pool {
        let before =
            candidate.col > 0 && ctx.grid.is_scheduled_at(candidate.row, candidate.col - 1);
        let after = ctx.grid.is_scheduled_at(candidate.row, candidate.col + 1);
        let neighbors = u32::from(before) + u32::from(after);
        candidate.weight += bonus * f64::from(neighbors);
    }
    pool
}

/// Favor columns with few open candidates relative to their requirement.
///
/// Scarcity is `required - open candidates in the column`; it is shifted by
/// the row count so the bonus is never negative, and the bonus grows
/// linearly with scarcity.
pub fn weight_tough_time(mut pool: Vec<Candidate>, ctx: &WeightContext<'_>) -> Vec<Candidate> {
    let scale = ctx.config.tough_time_scale;
    let rows = ctx.grid.rows().max(1) as f64;

    let mut open = vec![0u32; ctx.grid.cols()];
    for candidate in &pool {
        open[candidate.col] += 1;
    }

    for candidate in &mut pool {
        let scarcity =
            f64::from(ctx.ledger.required[candidate.col]) - f64::from(open[candidate.col]);
        candidate.weight += scale * (scarcity + rows) / rows;
    }
    pool
}
