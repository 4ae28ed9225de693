//! Validated availability grid: one row per person, one column per time slot.

use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

use crate::models::Slot;

use super::engine::SchedulerError;

/// Staffing status of a single (person, column) cell.
///
/// The only transition the scheduler performs is open (`Available` or
/// `Somewhat`) to `Scheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Available,
    Somewhat,
    Scheduled,
    Unavailable,
}

impl Status {
    /// Whether the cell may still be committed.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Status::Available | Status::Somewhat)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Somewhat => "Somewhat",
            Status::Scheduled => "Scheduled",
            Status::Unavailable => "Unavailable",
        }
    }
}

/// Tenting phase of a column, consumed by the staffing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Black,
    Blue,
    White,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Black => "Black",
            Phase::Blue => "Blue",
            Phase::White => "White",
        }
    }
}

/// Errors from parsing status and phase strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownStatus(String),
    UnknownPhase(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStatus(s) => write!(f, "Unknown status: {:?}", s),
            Self::UnknownPhase(s) => write!(f, "Unknown phase: {:?}", s),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Status::Available),
            "Somewhat" => Ok(Status::Somewhat),
            "Scheduled" => Ok(Status::Scheduled),
            "Unavailable" => Ok(Status::Unavailable),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }
}

impl FromStr for Phase {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Black" => Ok(Phase::Black),
            "Blue" => Ok(Phase::Blue),
            "White" => Ok(Phase::White),
            other => Err(ParseError::UnknownPhase(other.to_string())),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata shared by every cell of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeColumn {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_night: bool,
    pub phase: Phase,
}

/// Rectangular status grid with row-invariant column metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGrid {
    columns: Vec<TimeColumn>,
    cells: Vec<Vec<Status>>,
}

impl ScheduleGrid {
    /// Build a grid from caller rows, rejecting anything that is not a
    /// well-formed rectangle over `people_len` rows.
    pub fn from_slots(people_len: usize, rows: &[Vec<Slot>]) -> Result<Self, SchedulerError> {
        if rows.len() != people_len {
            return Err(SchedulerError::InvalidInput(format!(
                "grid has {} rows but {} people were given",
                rows.len(),
                people_len
            )));
        }

        let Some(first) = rows.first() else {
            return Ok(Self {
                columns: Vec::new(),
                cells: Vec::new(),
            });
        };

        let mut columns = Vec::with_capacity(first.len());
        for (col, slot) in first.iter().enumerate() {
            if slot.end_date < slot.start_date {
                return Err(SchedulerError::InvalidInput(format!(
                    "column {} ends ({}) before it starts ({})",
                    col, slot.end_date, slot.start_date
                )));
            }
            columns.push(TimeColumn {
                start_date: slot.start_date,
                end_date: slot.end_date,
                is_night: slot.is_night,
                phase: slot.phase.parse()?,
            });
        }

        let mut cells = Vec::with_capacity(rows.len());
        for (row, slots) in rows.iter().enumerate() {
            if slots.len() != columns.len() {
                return Err(SchedulerError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    slots.len(),
                    columns.len()
                )));
            }
            let mut statuses: Vec<Status> = Vec::with_capacity(slots.len());
            for (col, slot) in slots.iter().enumerate() {
                let column = &columns[col];
                let matches = slot.start_date == column.start_date
                    && slot.end_date == column.end_date
                    && slot.is_night == column.is_night
                    && slot.phase.parse::<Phase>()? == column.phase;
                if !matches {
                    return Err(SchedulerError::InvalidInput(format!(
                        "row {} column {} metadata differs from row 0",
                        row, col
                    )));
                }
                statuses.push(slot.status.parse()?);
            }
            cells.push(statuses);
        }

        Ok(Self { columns, cells })
    }

    /// Number of person rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of time columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn column(&self, col: usize) -> &TimeColumn {
        &self.columns[col]
    }

    pub fn columns(&self) -> &[TimeColumn] {
        &self.columns
    }

    #[inline]
    pub fn status(&self, row: usize, col: usize) -> Status {
        self.cells[row][col]
    }

    /// Whether `row` has a scheduled cell at `col`; out-of-range columns are not.
    pub fn is_scheduled_at(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|s| *s == Status::Scheduled)
    }

    /// Count scheduled cells in every column.
    pub fn scheduled_per_column(&self) -> Vec<u32> {
        let mut counts = vec![0u32; self.cols()];
        for row in &self.cells {
            for (col, status) in row.iter().enumerate() {
                if *status == Status::Scheduled {
                    counts[col] += 1;
                }
            }
        }
        counts
    }

    /// Move an open cell to `Scheduled`.
    ///
    /// Returns false and leaves the cell untouched if it was not open.
    pub fn commit(&mut self, row: usize, col: usize) -> bool {
        let cell = &mut self.cells[row][col];
        if !cell.is_open() {
            return false;
        }
        *cell = Status::Scheduled;
        true
    }
}
