//! Logging macros for the shift scheduler with verbosity level control.
//!
//! Nothing is formatted when the verbosity is below the macro's level.
//! Levels:
//! - 0: SILENT (nothing)
//! - 1: CHANGES (commits, columns becoming fully staffed)
//! - 2: CHECKS (candidate pool sizes, pruning)
//! - 3: DEBUG (per-candidate weight breakdown)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Whether a message at `level` is emitted under `verbosity`.
#[inline]
pub fn enabled(verbosity: u8, level: u8) -> bool {
    level > VERBOSITY_SILENT && verbosity >= level
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, $verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $level) {
            eprintln!($($arg)*);
        }
    };
}

/// Committed cells and columns that became fully staffed.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::logging::VERBOSITY_CHANGES, $verbosity, $($arg)*)
    };
}

/// Pool construction, per-iteration pool size, pruning.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::logging::VERBOSITY_CHECKS, $verbosity, $($arg)*)
    };
}

/// Per-candidate weights; callers that loop to log should check
/// `enabled(verbosity, VERBOSITY_DEBUG)` first.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::logging::VERBOSITY_DEBUG, $verbosity, $($arg)*)
    };
}
