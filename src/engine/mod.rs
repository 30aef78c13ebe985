//! Simulation engine for the four classical CPU-scheduling algorithms.
//!
//! One synchronous, deterministic entry point: [`simulate`] consumes a
//! [`SimulationRequest`] and returns a [`SimulationResult`] bundling the
//! completed-process records, their Gantt timeline, and the average
//! metrics. Each run allocates its own state; nothing is shared across
//! runs, so concurrent runs need no coordination.
//!
//! # Algorithms
//!
//! | Variant | Policy | Preemption |
//! |---------|--------|------------|
//! | [`Algorithm::Fcfs`] | arrival order | none |
//! | [`Algorithm::Sjf`] | shortest burst among arrived | none |
//! | [`Algorithm::Priority`] | lowest priority value among arrived | none |
//! | [`Algorithm::RoundRobin`] | FIFO queue, fixed quantum | per quantum |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "OSTEP", Ch. 7: Scheduling

mod fcfs;
mod policy;
mod round_robin;

pub use policy::{SelectionRule, ShortestBurst, UrgentFirst};

use serde::{Deserialize, Serialize};

use crate::metrics::AverageMetrics;
use crate::models::{CompletedProcess, ProcessInput, TimelineInterval};
use crate::timeline::build_timeline;
use crate::validation::{self, ValidationError, ValidationErrorKind};

/// Scheduling algorithm selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Priority scheduling, non-preemptive, lower value = more urgent.
    Priority,
    /// Round-robin with a fixed positive quantum.
    RoundRobin {
        /// Maximum time slice granted per dispatch.
        quantum: i64,
    },
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "First Come First Serve (FCFS)"),
            Algorithm::Sjf => write!(f, "Shortest Job First (SJF)"),
            Algorithm::Priority => write!(f, "Priority Scheduling"),
            Algorithm::RoundRobin { .. } => write!(f, "Round Robin (RR)"),
        }
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in input order (ids are 1-based indices).
    pub processes: Vec<ProcessInput>,
    /// Algorithm to simulate.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a request from already-built processes.
    pub fn new(processes: Vec<ProcessInput>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
        }
    }

    /// Builds a request from parallel per-process arrays.
    ///
    /// `arrivals` and `bursts` must have the same length; `priorities`,
    /// when given, must match it too. Ids are assigned from input order,
    /// starting at 1. Shape violations are rejected here; value-range
    /// checks happen in [`simulate`].
    pub fn from_arrays(
        algorithm: Algorithm,
        arrivals: &[i64],
        bursts: &[i64],
        priorities: Option<&[i64]>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let n = arrivals.len();

        if bursts.len() != n {
            errors.push(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!("{} arrival times but {} burst times", n, bursts.len()),
            ));
        }
        if let Some(p) = priorities {
            if p.len() != n {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LengthMismatch,
                    format!("{} arrival times but {} priorities", n, p.len()),
                ));
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let processes = arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(i, (&arrival, &burst))| {
                let p = ProcessInput::new(i + 1, arrival, burst);
                match priorities {
                    Some(values) => p.with_priority(values[i]),
                    None => p,
                }
            })
            .collect();

        Ok(Self::new(processes, algorithm))
    }
}

/// Complete output of one simulation run.
///
/// Immutable value returned per call; callers own any "current results"
/// state themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The simulated algorithm.
    pub algorithm: Algorithm,
    /// One record per input process, in completion order.
    pub completed: Vec<CompletedProcess>,
    /// Gantt-chart intervals, parallel to `completed`.
    pub timeline: Vec<TimelineInterval>,
    /// Mean metrics; `None` when no processes were supplied.
    pub averages: Option<AverageMetrics>,
}

/// Errors surfaced by [`simulate`].
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The request failed validation; nothing was simulated.
    InvalidInput(Vec<ValidationError>),
    /// A process never became eligible and the clock could not advance.
    /// Unreachable for validated input; reported instead of spinning.
    Stalled {
        /// Id of the process the engine was waiting on.
        process_id: usize,
        /// Clock value at which progress stopped.
        clock: i64,
    },
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            SimulationError::Stalled { process_id, clock } => write!(
                f,
                "simulation stalled waiting on process P{process_id} at clock {clock}"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Runs one simulation.
///
/// Validates the request first (fail fast, no partial results), runs the
/// selected algorithm, and derives the timeline and averages from the
/// completed records. Pure and deterministic: the same request always
/// yields the same result.
///
/// An empty process set succeeds with empty sequences and no averages,
/// so "no data" stays distinguishable from "input malformed".
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    validation::validate_request(request).map_err(SimulationError::InvalidInput)?;

    let completed = match request.algorithm {
        Algorithm::Fcfs => fcfs::run(&request.processes),
        Algorithm::Sjf => policy::run_nonpreemptive(&request.processes, &ShortestBurst)?,
        Algorithm::Priority => policy::run_nonpreemptive(&request.processes, &UrgentFirst)?,
        Algorithm::RoundRobin { quantum } => round_robin::run(&request.processes, quantum)?,
    };

    let timeline = build_timeline(&completed);
    let averages = AverageMetrics::calculate(&completed);

    Ok(SimulationResult {
        algorithm: request.algorithm.clone(),
        completed,
        timeline,
        averages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_sorted(result: &SimulationResult) -> Vec<usize> {
        let mut ids: Vec<usize> = result.completed.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_fcfs_simultaneous_arrivals() {
        let request =
            SimulationRequest::from_arrays(Algorithm::Fcfs, &[0, 0, 0], &[5, 3, 8], None).unwrap();
        let result = simulate(&request).unwrap();

        let finishes: Vec<i64> = result.completed.iter().map(|c| c.finish_time).collect();
        assert_eq!(finishes, vec![5, 8, 16]);

        let avg = result.averages.unwrap();
        assert!((avg.avg_turnaround - (5.0 + 8.0 + 16.0) / 3.0).abs() < 1e-9);
        assert!((avg.avg_waiting - (0.0 + 5.0 + 8.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sjf_reference_workload() {
        let request = SimulationRequest::from_arrays(
            Algorithm::Sjf,
            &[1, 5, 0, 2, 3],
            &[18, 24, 12, 16, 20],
            None,
        )
        .unwrap();
        let result = simulate(&request).unwrap();

        assert_eq!(result.completed[0].id, 3); // only arrival at t=0
        let finishes: Vec<i64> = result.completed.iter().map(|c| c.finish_time).collect();
        assert_eq!(finishes, vec![12, 28, 46, 66, 90]);
        assert_eq!(ids_sorted(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_priority_dispatch_order() {
        let request = SimulationRequest::from_arrays(
            Algorithm::Priority,
            &[0, 0, 0],
            &[5, 5, 5],
            Some(&[2, 1, 3]),
        )
        .unwrap();
        let result = simulate(&request).unwrap();

        let order: Vec<usize> = result.completed.iter().map(|c| c.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_round_robin_interleaving() {
        let request = SimulationRequest::from_arrays(
            Algorithm::RoundRobin { quantum: 2 },
            &[0, 1, 2],
            &[4, 3, 5],
            None,
        )
        .unwrap();
        let result = simulate(&request).unwrap();

        let finishes: Vec<i64> = result.completed.iter().map(|c| c.finish_time).collect();
        assert_eq!(finishes, vec![8, 9, 12]);
        assert!(result
            .completed
            .iter()
            .all(|c| c.response_time <= c.wait_time));
    }

    #[test]
    fn test_result_bundles_timeline_and_averages() {
        let request =
            SimulationRequest::from_arrays(Algorithm::Fcfs, &[0, 2], &[3, 4], None).unwrap();
        let result = simulate(&request).unwrap();

        assert_eq!(result.timeline.len(), result.completed.len());
        assert_eq!(result.timeline[0].label, "P1");
        assert_eq!(result.timeline[0].start, 0);
        assert_eq!(result.timeline[0].end, 3);
        assert!(result.averages.is_some());
    }

    #[test]
    fn test_idempotent_runs() {
        let request = SimulationRequest::from_arrays(
            Algorithm::RoundRobin { quantum: 3 },
            &[0, 2, 4, 4],
            &[7, 5, 3, 6],
            None,
        )
        .unwrap();
        let first = simulate(&request).unwrap();
        let second = simulate(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_defined_result() {
        let request = SimulationRequest::from_arrays(Algorithm::Sjf, &[], &[], None).unwrap();
        let result = simulate(&request).unwrap();
        assert!(result.completed.is_empty());
        assert!(result.timeline.is_empty());
        assert!(result.averages.is_none());
    }

    #[test]
    fn test_invalid_input_rejected_before_simulation() {
        let request =
            SimulationRequest::from_arrays(Algorithm::Fcfs, &[0, -3], &[5, 5], None).unwrap();
        let err = simulate(&request).unwrap_err();
        match err {
            SimulationError::InvalidInput(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_length_mismatch_rejected_at_construction() {
        let err =
            SimulationRequest::from_arrays(Algorithm::Fcfs, &[0, 1], &[5], None).unwrap_err();
        assert_eq!(err[0].kind, ValidationErrorKind::LengthMismatch);

        let err = SimulationRequest::from_arrays(
            Algorithm::Priority,
            &[0, 1],
            &[5, 5],
            Some(&[1]),
        )
        .unwrap_err();
        assert_eq!(err[0].kind, ValidationErrorKind::LengthMismatch);
    }

    #[test]
    fn test_every_algorithm_emits_each_process_once() {
        let arrivals = [3, 0, 6, 1];
        let bursts = [4, 8, 2, 5];
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Priority,
            Algorithm::RoundRobin { quantum: 2 },
        ];

        for algorithm in algorithms {
            let request = SimulationRequest::from_arrays(
                algorithm,
                &arrivals,
                &bursts,
                Some(&[2, 0, 3, 1]),
            )
            .unwrap();
            let result = simulate(&request).unwrap();
            assert_eq!(ids_sorted(&result), vec![1, 2, 3, 4]);
            assert!(result
                .completed
                .iter()
                .all(|c| c.finish_time >= c.arrival_time + c.burst_time));
            assert!(result.completed.iter().all(|c| c.wait_time >= 0));
            assert!(result.completed.iter().all(|c| c.response_time >= 0));
        }
    }

    #[test]
    fn test_algorithm_display_names() {
        assert_eq!(Algorithm::Fcfs.to_string(), "First Come First Serve (FCFS)");
        assert_eq!(Algorithm::Sjf.to_string(), "Shortest Job First (SJF)");
        assert_eq!(Algorithm::Priority.to_string(), "Priority Scheduling");
        assert_eq!(
            Algorithm::RoundRobin { quantum: 2 }.to_string(),
            "Round Robin (RR)"
        );
    }

    #[test]
    fn test_error_display() {
        let err = SimulationError::Stalled {
            process_id: 2,
            clock: 7,
        };
        assert_eq!(
            err.to_string(),
            "simulation stalled waiting on process P2 at clock 7"
        );
    }
}
