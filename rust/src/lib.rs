//! Rust implementation of the tent shift scheduler.
//!
//! Assigns people to time slots so each slot reaches its required headcount,
//! balancing shifts per person and preferring contiguous blocks of time.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod logging;
mod models;
pub mod policy;
pub mod scheduler;
pub mod sorting;
pub mod summary;

pub use config::{SchedulerConfig, StaffingTable};
pub use models::{Person, ScheduleResult, Slot, SummaryEntry, TimelineBlock};
pub use policy::StaffingPolicy;
pub use scheduler::{Phase, Scheduler, SchedulerError, Status};
pub use summary::{process_data, simplify_grid};

/// Schedule people into slots.
///
/// # Arguments
/// * `people` - People in row order
/// * `grid` - One list of slots per person, all lists the same length
/// * `config` - Heuristic scales and verbosity (defaults if omitted)
/// * `staffing` - Required headcount table (tenting defaults if omitted)
///
/// # Returns
/// * ScheduleResult with the per-slot summary, merged timeline and updated people
///
/// # Raises
/// * ValueError if the grid is malformed or contains unknown status/phase strings
#[pyfunction]
#[pyo3(name = "schedule", signature = (people, grid, config=None, staffing=None))]
fn py_schedule(
    people: Vec<Person>,
    grid: Vec<Vec<Slot>>,
    config: Option<SchedulerConfig>,
    staffing: Option<StaffingTable>,
) -> PyResult<ScheduleResult> {
    let scheduler = Scheduler::new(staffing.unwrap_or_default(), config.unwrap_or_default())
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;

    match scheduler.schedule(&people, &grid) {
        Ok(result) => Ok(result),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Merge consecutive summary entries with the same people and phase.
#[pyfunction]
#[pyo3(name = "simplify")]
fn py_simplify(entries: Vec<SummaryEntry>) -> Vec<TimelineBlock> {
    simplify_grid(&entries)
}

/// Required headcount for a slot.
///
/// # Raises
/// * ValueError if `phase` is not a known phase
#[pyfunction]
#[pyo3(name = "required_headcount", signature = (is_night, phase, staffing=None))]
fn py_required_headcount(
    is_night: bool,
    phase: String,
    staffing: Option<StaffingTable>,
) -> PyResult<u32> {
    let phase: Phase = match phase.parse() {
        Ok(p) => p,
        Err(e) => return Err(pyo3::exceptions::PyValueError::new_err(format!("{}", e))),
    };
    Ok(staffing.unwrap_or_default().required_headcount(is_night, phase))
}

/// The tentshift.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Person>()?;
    m.add_class::<Slot>()?;
    m.add_class::<SummaryEntry>()?;
    m.add_class::<TimelineBlock>()?;
    m.add_class::<ScheduleResult>()?;

    // Config types
    m.add_class::<SchedulerConfig>()?;
    m.add_class::<StaffingTable>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_simplify, m)?)?;
    m.add_function(wrap_pyfunction!(py_required_headcount, m)?)?;

    Ok(())
}
