//! Selection and commit of the top candidate.

use crate::log_changes;
use crate::log_checks;

use super::pool::Candidate;
use super::state::SchedulerState;

/// Commit the first candidate of a sorted pool and prune what is no longer
/// eligible.
///
/// The committed cell becomes `Scheduled`, its owner's shift counter grows,
/// and if the column just reached its requirement every other candidate in
/// that column is dropped. An empty pool is returned unchanged.
pub fn weight_pick(
    state: &mut SchedulerState,
    pool: Vec<Candidate>,
    verbosity: u8,
) -> Vec<Candidate> {
    let Some(top) = pool.first().copied() else {
        return pool;
    };

    if state.grid.commit(top.row, top.col) {
        let is_night = state.grid.column(top.col).is_night;
        state.people[top.row].add_shift(is_night);
        log_changes!(
            verbosity,
            "[commit] {} -> column {} (weight {:.3})",
            state.people[top.row].id,
            top.col,
            top.weight
        );
        if state.ledger.record_commit(top.col) {
            log_changes!(verbosity, "[commit] column {} fully staffed", top.col);
        } else {
            log_checks!(
                verbosity,
                "[commit] column {} still needs {}",
                top.col,
                state.ledger.remaining(top.col)
            );
        }
    }

    let before = pool.len();
    let ledger = &state.ledger;
    let pruned: Vec<Candidate> = pool
        .into_iter()
        .skip(1)
        .filter(|c| !ledger.is_satisfied(c.col))
        .collect();
    log_checks!(
        verbosity,
        "[pick] pruned {} candidates, {} left",
        before - pruned.len(),
        pruned.len()
    );

    pruned
}
