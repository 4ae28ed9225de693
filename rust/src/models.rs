//! Caller-facing records: people, input slots, and the produced summaries.

use chrono::NaiveDateTime;
use pyo3::prelude::*;

/// A person in the pool, with the shifts already committed to them.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub day_scheduled: u32,
    #[pyo3(get, set)]
    pub night_scheduled: u32,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            day_scheduled: 0,
            night_scheduled: 0,
        }
    }

    /// Record one more committed shift of the given kind.
    pub fn add_shift(&mut self, is_night: bool) {
        if is_night {
            self.night_scheduled = self.night_scheduled.saturating_add(1);
        } else {
            self.day_scheduled = self.day_scheduled.saturating_add(1);
        }
    }
}

#[pymethods]
impl Person {
    #[new]
    #[pyo3(signature = (id, day_scheduled=0, night_scheduled=0))]
    fn py_new(id: String, day_scheduled: u32, night_scheduled: u32) -> Self {
        Self {
            id,
            day_scheduled,
            night_scheduled,
        }
    }

    /// Day and night shifts combined.
    pub fn total_scheduled(&self) -> u32 {
        self.day_scheduled.saturating_add(self.night_scheduled)
    }

    fn __repr__(&self) -> String {
        format!(
            "Person(id={:?}, day_scheduled={}, night_scheduled={})",
            self.id, self.day_scheduled, self.night_scheduled
        )
    }
}

/// One availability cell as supplied by the caller.
///
/// `phase` and `status` are parsed when the grid is validated.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    #[pyo3(get, set)]
    pub start_date: NaiveDateTime,
    #[pyo3(get, set)]
    pub end_date: NaiveDateTime,
    #[pyo3(get, set)]
    pub is_night: bool,
    #[pyo3(get, set)]
    pub phase: String,
    #[pyo3(get, set)]
    pub status: String,
}

#[pymethods]
impl Slot {
    #[new]
    fn new(
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        is_night: bool,
        phase: String,
        status: String,
    ) -> Self {
        Self {
            start_date,
            end_date,
            is_night,
            phase,
            status,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Slot(start={}, end={}, night={}, phase={:?}, status={:?})",
            self.start_date, self.end_date, self.is_night, self.phase, self.status
        )
    }
}

/// Who is scheduled in one column, and how many are still missing.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryEntry {
    #[pyo3(get, set)]
    pub start_date: NaiveDateTime,
    #[pyo3(get, set)]
    pub end_date: NaiveDateTime,
    #[pyo3(get, set)]
    pub is_night: bool,
    #[pyo3(get, set)]
    pub phase: String,
    /// Person ids in person order
    #[pyo3(get, set)]
    pub ids: Vec<String>,
    /// Required headcount minus `ids.len()`; not clamped
    #[pyo3(get, set)]
    pub people_left: i64,
}

#[pymethods]
impl SummaryEntry {
    #[new]
    fn new(
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        is_night: bool,
        phase: String,
        ids: Vec<String>,
        people_left: i64,
    ) -> Self {
        Self {
            start_date,
            end_date,
            is_night,
            phase,
            ids,
            people_left,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SummaryEntry(start={}, end={}, phase={:?}, ids={:?}, people_left={})",
            self.start_date, self.end_date, self.phase, self.ids, self.people_left
        )
    }
}

/// A run of consecutive summary entries with the same people and phase.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineBlock {
    #[pyo3(get, set)]
    pub start_date: NaiveDateTime,
    #[pyo3(get, set)]
    pub end_date: NaiveDateTime,
    /// True if any merged entry is a night column
    #[pyo3(get, set)]
    pub is_night: bool,
    #[pyo3(get, set)]
    pub phase: String,
    #[pyo3(get, set)]
    pub ids: Vec<String>,
    /// `people_left` of the first merged entry
    #[pyo3(get, set)]
    pub people_left: i64,
}

#[pymethods]
impl TimelineBlock {
    fn __repr__(&self) -> String {
        format!(
            "TimelineBlock(start={}, end={}, phase={:?}, ids={:?}, people_left={})",
            self.start_date, self.end_date, self.phase, self.ids, self.people_left
        )
    }
}

impl From<&SummaryEntry> for TimelineBlock {
    fn from(entry: &SummaryEntry) -> Self {
        Self {
            start_date: entry.start_date,
            end_date: entry.end_date,
            is_night: entry.is_night,
            phase: entry.phase.clone(),
            ids: entry.ids.clone(),
            people_left: entry.people_left,
        }
    }
}

impl From<&TimelineBlock> for SummaryEntry {
    fn from(block: &TimelineBlock) -> Self {
        Self {
            start_date: block.start_date,
            end_date: block.end_date,
            is_night: block.is_night,
            phase: block.phase.clone(),
            ids: block.ids.clone(),
            people_left: block.people_left,
        }
    }
}

/// Output of one scheduling run.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct ScheduleResult {
    /// One entry per input column, in column order
    #[pyo3(get, set)]
    pub combined_grid: Vec<SummaryEntry>,
    #[pyo3(get, set)]
    pub simplified_grid: Vec<TimelineBlock>,
    /// People with their final shift counters, in input order
    #[pyo3(get, set)]
    pub people: Vec<Person>,
    /// Number of weight/sort/pick iterations the run took
    #[pyo3(get, set)]
    pub iterations: usize,
}

#[pymethods]
impl ScheduleResult {
    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(columns={}, blocks={}, iterations={})",
            self.combined_grid.len(),
            self.simplified_grid.len(),
            self.iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_add_shift() {
        let mut person = Person::new("ann");
        person.add_shift(false);
        person.add_shift(true);
        person.add_shift(true);
        assert_eq!(person.day_scheduled, 1);
        assert_eq!(person.night_scheduled, 2);
        assert_eq!(person.total_scheduled(), 3);
    }

    #[test]
    fn test_counters_saturate() {
        let mut person = Person {
            id: "max".to_string(),
            day_scheduled: u32::MAX,
            night_scheduled: u32::MAX - 1,
        };
        person.add_shift(false);
        person.add_shift(true);
        assert_eq!(person.day_scheduled, u32::MAX);
        assert_eq!(person.night_scheduled, u32::MAX);
        assert_eq!(person.total_scheduled(), u32::MAX);
    }
}
