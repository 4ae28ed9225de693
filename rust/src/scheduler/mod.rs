//! Greedy shift scheduler.
//!
//! Builds a pool of open cells once, then repeatedly weights, sorts and
//! commits the best candidate until no column still needing people has an
//! open cell left.

mod engine;
pub(crate) mod grid;
mod pick;
mod pool;
mod state;
pub mod weight;

pub use engine::{Scheduler, SchedulerError};
pub use grid::{ParseError, Phase, ScheduleGrid, Status, TimeColumn};
pub use pick::weight_pick;
pub use pool::{build_candidate_pool, Candidate};
pub use state::{ColumnLedger, SchedulerState};
