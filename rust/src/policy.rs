//! Staffing policy: how many people a column needs.

use crate::config::StaffingTable;
use crate::scheduler::Phase;

/// Maps a column's night flag and phase to its required headcount.
///
/// Implementations must be pure: the scheduler may ask for the same column
/// any number of times and expects the same answer.
pub trait StaffingPolicy {
    fn required_headcount(&self, is_night: bool, phase: Phase) -> u32;
}

impl StaffingPolicy for StaffingTable {
    fn required_headcount(&self, is_night: bool, phase: Phase) -> u32 {
        match (phase, is_night) {
            (Phase::Black, false) => self.black_day,
            (Phase::Black, true) => self.black_night,
            (Phase::Blue, false) => self.blue_day,
            (Phase::Blue, true) => self.blue_night,
            (Phase::White, false) => self.white_day,
            (Phase::White, true) => self.white_night,
        }
    }
}

impl<F> StaffingPolicy for F
where
    F: Fn(bool, Phase) -> u32,
{
    fn required_headcount(&self, is_night: bool, phase: Phase) -> u32 {
        self(is_night, phase)
    }
}
