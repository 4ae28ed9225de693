//! Candidate ordering for the selection step.
//!
//! Highest weight first. Equal weights are broken by row (person order),
//! then by column, so the order is total and a run is reproducible.

use std::cmp::Ordering;

use crate::scheduler::Candidate;

/// Compare f64 values for sorting, treating NaN as equal to everything.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Ordering used by `sort_candidates`: `Less` means `a` is picked first.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    cmp_f64(b.weight, a.weight)
        .then(a.row.cmp(&b.row))
        .then(a.col.cmp(&b.col))
}

/// Sort the pool so the next candidate to commit is at index 0.
pub fn sort_candidates(pool: &mut [Candidate]) {
    pool.sort_by(compare_candidates);
}
