//! Scheduler engine: pool building, weight/sort/pick loop, compression.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::config::SchedulerConfig;
use crate::logging;
use crate::models::{Person, ScheduleResult, Slot};
use crate::policy::StaffingPolicy;
use crate::sorting::sort_candidates;
use crate::summary::{process_data, simplify_grid};
use crate::{log_checks, log_debug};

use super::grid::{ParseError, ScheduleGrid};
use super::pick::weight_pick;
use super::pool::{build_candidate_pool, Candidate};
use super::state::SchedulerState;
use super::weight::{apply_pipeline, WeightContext};

/// Errors that can occur during scheduling.
///
/// All of them are raised before the grid or any person is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ParseError> for SchedulerError {
    fn from(err: ParseError) -> Self {
        SchedulerError::InvalidInput(err.to_string())
    }
}

/// Person ids label the summary, so two rows may not share one.
fn check_unique_ids(people: &[Person]) -> Result<(), SchedulerError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for person in people {
        if !seen.insert(person.id.as_str()) {
            return Err(SchedulerError::InvalidInput(format!(
                "duplicate person id: {:?}",
                person.id
            )));
        }
    }
    Ok(())
}

/// Greedy shift scheduler driven by a staffing policy.
pub struct Scheduler<P: StaffingPolicy> {
    policy: P,
    config: SchedulerConfig,
}

impl<P: StaffingPolicy> Scheduler<P> {
    /// Create a new scheduler, rejecting invalid heuristic scales.
    pub fn new(policy: P, config: SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate().map_err(SchedulerError::InvalidInput)?;
        Ok(Self { policy, config })
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Fill every column up to its required headcount as far as availability
    /// allows.
    ///
    /// `grid[i]` is the availability row of `people[i]`. The inputs are not
    /// modified; the result carries the per-column summary, the merged
    /// timeline and the people with updated shift counters.
    pub fn schedule(
        &self,
        people: &[Person],
        grid: &[Vec<Slot>],
    ) -> Result<ScheduleResult, SchedulerError> {
        check_unique_ids(people)?;
        let grid = ScheduleGrid::from_slots(people.len(), grid)?;
        let (pool, ledger) = build_candidate_pool(&grid, &self.policy);
        let verbosity = self.config.verbosity;
        log_checks!(
            verbosity,
            "[pool] {} people x {} columns, {} candidates, {} columns already staffed",
            grid.rows(),
            grid.cols(),
            pool.len(),
            ledger.satisfied.iter().filter(|s| **s).count()
        );

        let mut state = SchedulerState::new(grid, people.to_vec(), ledger);
        let iterations = self.run(&mut state, pool);

        let combined_grid = process_data(&state.people, &state.grid, &self.policy);
        let simplified_grid = simplify_grid(&combined_grid);

        Ok(ScheduleResult {
            combined_grid,
            simplified_grid,
            people: state.people,
            iterations,
        })
    }

    /// Weight, sort and pick until the pool is empty.
    ///
    /// Each pick removes at least the committed candidate, so the loop runs
    /// at most once per initial candidate.
    fn run(&self, state: &mut SchedulerState, mut pool: Vec<Candidate>) -> usize {
        let verbosity = self.config.verbosity;
        let mut iterations = 0;

        while !pool.is_empty() {
            iterations += 1;
            log_checks!(verbosity, "[loop] iteration {}, {} candidates", iterations, pool.len());

            pool = apply_pipeline(pool, &WeightContext::new(state, &self.config));
            sort_candidates(&mut pool);

            if logging::enabled(verbosity, logging::VERBOSITY_DEBUG) {
                for c in &pool {
                    log_debug!(
                        verbosity,
                        "[weight] {} column {} -> {:.3}",
                        state.people[c.row].id,
                        c.col,
                        c.weight
                    );
                }
            }

            pool = weight_pick(state, pool, verbosity);
        }

        iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaffingTable;
    use crate::scheduler::grid::tests::{rows, slot};
    use crate::scheduler::Phase;

    fn flat(n: u32) -> impl Fn(bool, Phase) -> u32 {
        move |_, _| n
    }

    fn people(n: usize) -> Vec<Person> {
        (0..n).map(|i| Person::new(format!("p{}", i))).collect()
    }

    fn scheduler(required: u32) -> Scheduler<impl Fn(bool, Phase) -> u32> {
        Scheduler::new(flat(required), SchedulerConfig::default()).unwrap()
    }

    fn scheduled_count(result: &ScheduleResult, col: usize) -> usize {
        result.combined_grid[col].ids.len()
    }

    #[test]
    fn test_one_column_three_people_two_needed() {
        let result = scheduler(2)
            .schedule(&people(3), &rows(&["A", "A", "A"]))
            .unwrap();

        assert_eq!(result.combined_grid.len(), 1);
        assert_eq!(scheduled_count(&result, 0), 2);
        assert_eq!(result.combined_grid[0].people_left, 0);
        assert_eq!(result.iterations, 2);
        // Equal weights: tie-break picks the earliest rows.
        assert_eq!(result.combined_grid[0].ids, vec!["p0", "p1"]);
        assert_eq!(result.people[2].total_scheduled(), 0);
    }

    #[test]
    fn test_adjacent_columns_merge_into_one_block() {
        let result = scheduler(1).schedule(&people(1), &rows(&["AA"])).unwrap();

        assert_eq!(result.combined_grid[0].ids, vec!["p0"]);
        assert_eq!(result.combined_grid[1].ids, vec!["p0"]);
        assert_eq!(result.simplified_grid.len(), 1);
        let block = &result.simplified_grid[0];
        assert_eq!(block.start_date, result.combined_grid[0].start_date);
        assert_eq!(block.end_date, result.combined_grid[1].end_date);
    }

    #[test]
    fn test_prestaffed_column_untouched() {
        let result = scheduler(2)
            .schedule(&people(3), &rows(&["XA", "XA", "AA"]))
            .unwrap();

        assert_eq!(result.combined_grid[0].ids, vec!["p0", "p1"]);
        assert_eq!(result.combined_grid[0].people_left, 0);
        assert_eq!(scheduled_count(&result, 1), 2);
        // Only column 1 needed picks.
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_empty_pool_passes_grid_through() {
        let result = scheduler(1)
            .schedule(&people(2), &rows(&["X.", ".."]))
            .unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.combined_grid[0].ids, vec!["p0"]);
        assert!(result.combined_grid[1].ids.is_empty());
        assert_eq!(result.combined_grid[1].people_left, 1);
        assert_eq!(result.people, people(2));
    }

    #[test]
    fn test_empty_input() {
        let result = scheduler(1).schedule(&[], &[]).unwrap();
        assert!(result.combined_grid.is_empty());
        assert!(result.simplified_grid.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_never_exceeds_requirement_or_unschedules() {
        let pattern = ["XASA.A", "AAAAAA", "SA.AAX", "A.AAAA", "AAAA.A"];
        let before = rows(&pattern);
        let result = scheduler(2).schedule(&people(5), &before).unwrap();

        let candidates = pattern
            .iter()
            .flat_map(|r| r.chars())
            .filter(|c| matches!(c, 'A' | 'S'))
            .count();
        assert!(result.iterations <= candidates);

        for (col, entry) in result.combined_grid.iter().enumerate() {
            assert!(entry.ids.len() <= 2, "column {} over-staffed", col);
            for (row, line) in pattern.iter().enumerate() {
                if line.as_bytes()[col] == b'X' {
                    assert!(entry.ids.contains(&format!("p{}", row)));
                }
                if line.as_bytes()[col] == b'.' {
                    assert!(!entry.ids.contains(&format!("p{}", row)));
                }
            }
        }
    }

    #[test]
    fn test_summary_consistency() {
        let table = StaffingTable::default();
        let mut grid = rows(&["AAAA", "AAAA", "AAAA"]);
        for row in &mut grid {
            row[2].is_night = true;
            row[3].phase = "Black".to_string();
        }
        let result = Scheduler::new(table.clone(), SchedulerConfig::default())
            .unwrap()
            .schedule(&people(3), &grid)
            .unwrap();

        for entry in &result.combined_grid {
            let phase: Phase = entry.phase.parse().unwrap();
            let required = i64::from(table.required_headcount(entry.is_night, phase));
            assert_eq!(entry.people_left, required - entry.ids.len() as i64);
        }
        // White night needs 2, Black day needs 2: both reachable with 3 people.
        assert_eq!(result.combined_grid[2].people_left, 0);
        assert_eq!(result.combined_grid[3].people_left, 0);

        let counted: u32 = result.people.iter().map(|p| p.total_scheduled()).sum();
        let listed: usize = result.combined_grid.iter().map(|e| e.ids.len()).sum();
        assert_eq!(counted as usize, listed);
        let nights: u32 = result.people.iter().map(|p| p.night_scheduled).sum();
        assert_eq!(nights, 2);
    }

    #[test]
    fn test_balance_alternates_between_equals() {
        let config = SchedulerConfig {
            contiguous_bonus: 0.0,
            ..SchedulerConfig::default()
        };
        let result = Scheduler::new(flat(1), config)
            .unwrap()
            .schedule(&people(2), &rows(&["AAAAAAAA", "AAAAAAAA"]))
            .unwrap();

        let counts: Vec<u32> = result.people.iter().map(|p| p.total_scheduled()).collect();
        assert_eq!(counts, vec![4, 4]);
        assert_eq!(result.combined_grid[0].ids, vec!["p0"]);
        assert_eq!(result.combined_grid[1].ids, vec!["p1"]);
    }

    #[test]
    fn test_fewer_prior_shifts_chosen_at_least_as_often() {
        let mut crew = people(2);
        crew[0].day_scheduled = 5;
        let config = SchedulerConfig {
            contiguous_bonus: 0.0,
            ..SchedulerConfig::default()
        };
        let result = Scheduler::new(flat(1), config)
            .unwrap()
            .schedule(&crew, &rows(&["AAAAAA", "AAAAAA"]))
            .unwrap();

        let gained: Vec<u32> = result
            .people
            .iter()
            .zip(&crew)
            .map(|(after, before)| after.total_scheduled() - before.total_scheduled())
            .collect();
        assert!(gained[1] >= gained[0]);
        assert_eq!(gained[0] + gained[1], 6);
    }

    #[test]
    fn test_adjacent_candidate_outranks_isolated_one() {
        // p0 is already scheduled in column 2. Columns 0 and 3 are equally
        // scarce, but column 3 extends p0's block.
        let grid = ScheduleGrid::from_slots(1, &rows(&["A.XA"])).unwrap();
        let policy = flat(1);
        let (pool, ledger) = build_candidate_pool(&grid, &policy);
        let state = SchedulerState::new(grid, people(1), ledger);
        let config = SchedulerConfig::default();

        let mut pool = apply_pipeline(pool, &WeightContext::new(&state, &config));
        sort_candidates(&mut pool);
        assert_eq!((pool[0].row, pool[0].col), (0, 3));
        assert!(pool[0].weight > pool[1].weight);
    }

    #[test]
    fn test_contiguity_builds_one_block() {
        let config = SchedulerConfig {
            balance_scale: 0.0,
            ..SchedulerConfig::default()
        };
        // Either person could cover every column alone; the first pick
        // decides who, and contiguity keeps the rest with them.
        let result = Scheduler::new(flat(1), config)
            .unwrap()
            .schedule(&people(2), &rows(&["AAAA", "AAAA"]))
            .unwrap();
        assert_eq!(result.simplified_grid.len(), 1);
        assert_eq!(result.simplified_grid[0].ids, vec!["p0"]);
    }

    #[test]
    fn test_somewhat_cells_are_schedulable() {
        let result = scheduler(1).schedule(&people(1), &rows(&["S"])).unwrap();
        assert_eq!(result.combined_grid[0].ids, vec!["p0"]);
    }

    #[test]
    fn test_invalid_input_rejected_before_any_work() {
        let mut grid = rows(&["AA", "AA"]);
        grid[1].push(slot(2, "Available"));
        let err = scheduler(1).schedule(&people(2), &grid).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidInput(_)));

        let err = scheduler(1)
            .schedule(&people(1), &rows(&["AA", "AA"]))
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let crew = vec![Person::new("sam"), Person::new("sam")];
        let err = scheduler(1)
            .schedule(&crew, &rows(&["A", "A"]))
            .unwrap_err();
        assert!(err.to_string().contains("sam"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SchedulerConfig {
            balance_scale: -1.0,
            ..SchedulerConfig::default()
        };
        assert!(Scheduler::new(flat(1), config).is_err());
    }

    #[test]
    fn test_runs_are_deterministic() {
        let grid = rows(&["AASAAS", "SAAAAA", "AA.AAA", "A.AAAA"]);
        let first = scheduler(2).schedule(&people(4), &grid).unwrap();
        let second = scheduler(2).schedule(&people(4), &grid).unwrap();
        assert_eq!(first.combined_grid, second.combined_grid);
        assert_eq!(first.simplified_grid, second.simplified_grid);
    }
}
