//! Configuration types for the shift scheduler.

use pyo3::prelude::*;

/// Scales for the weighting heuristics plus log verbosity.
///
/// Every candidate starts an iteration at weight 1.0; each heuristic adds a
/// non-negative bonus scaled by the matching field.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Scale of the fairness bonus (fewer committed shifts => larger bonus)
    #[pyo3(get, set)]
    pub balance_scale: f64,
    /// Bonus per directly adjacent column already scheduled for the same person
    #[pyo3(get, set)]
    pub contiguous_bonus: f64,
    /// Scale of the scarcity bonus for columns with few open candidates
    #[pyo3(get, set)]
    pub tough_time_scale: f64,
    /// Logging verbosity (0-3), see `crate::logging`
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            balance_scale: 1.0,
            contiguous_bonus: 0.5,
            tough_time_scale: 1.0,
            verbosity: 0,
        }
    }
}

impl SchedulerConfig {
    /// Check that every scale is finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let scales = [
            ("balance_scale", self.balance_scale),
            ("contiguous_bonus", self.contiguous_bonus),
            ("tough_time_scale", self.tough_time_scale),
        ];
        for (name, value) in scales {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        Ok(())
    }
}

#[pymethods]
impl SchedulerConfig {
    #[new]
    #[pyo3(signature = (
        balance_scale=None,
        contiguous_bonus=None,
        tough_time_scale=None,
        verbosity=None
    ))]
    fn new(
        balance_scale: Option<f64>,
        contiguous_bonus: Option<f64>,
        tough_time_scale: Option<f64>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            balance_scale: balance_scale.unwrap_or(defaults.balance_scale),
            contiguous_bonus: contiguous_bonus.unwrap_or(defaults.contiguous_bonus),
            tough_time_scale: tough_time_scale.unwrap_or(defaults.tough_time_scale),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SchedulerConfig(balance_scale={}, contiguous_bonus={}, tough_time_scale={}, verbosity={})",
            self.balance_scale, self.contiguous_bonus, self.tough_time_scale, self.verbosity
        )
    }
}

/// Required headcount per phase, split by day and night columns.
///
/// Defaults to the tenting rules: the stricter the phase, the more people
/// must be present, and nights always need more people than days.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffingTable {
    #[pyo3(get, set)]
    pub black_day: u32,
    #[pyo3(get, set)]
    pub black_night: u32,
    #[pyo3(get, set)]
    pub blue_day: u32,
    #[pyo3(get, set)]
    pub blue_night: u32,
    #[pyo3(get, set)]
    pub white_day: u32,
    #[pyo3(get, set)]
    pub white_night: u32,
}

impl Default for StaffingTable {
    fn default() -> Self {
        Self {
            black_day: 2,
            black_night: 10,
            blue_day: 1,
            blue_night: 6,
            white_day: 1,
            white_night: 2,
        }
    }
}

#[pymethods]
impl StaffingTable {
    #[new]
    #[pyo3(signature = (
        black_day=None,
        black_night=None,
        blue_day=None,
        blue_night=None,
        white_day=None,
        white_night=None
    ))]
    fn new(
        black_day: Option<u32>,
        black_night: Option<u32>,
        blue_day: Option<u32>,
        blue_night: Option<u32>,
        white_day: Option<u32>,
        white_night: Option<u32>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            black_day: black_day.unwrap_or(defaults.black_day),
            black_night: black_night.unwrap_or(defaults.black_night),
            blue_day: blue_day.unwrap_or(defaults.blue_day),
            blue_night: blue_night.unwrap_or(defaults.blue_night),
            white_day: white_day.unwrap_or(defaults.white_day),
            white_night: white_night.unwrap_or(defaults.white_night),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "StaffingTable(black={}/{}, blue={}/{}, white={}/{})",
            self.black_day,
            self.black_night,
            self.blue_day,
            self.blue_night,
            self.white_day,
            self.white_night
        )
    }
}
