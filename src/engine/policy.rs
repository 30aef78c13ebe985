//! Selection rules and the shared non-preemptive executor.
//!
//! SJF and priority scheduling have the same control structure: at each
//! decision point, pick one eligible process (arrived, unfinished) by a
//! rule and run it to completion. Only the rule differs, so both are a
//! `SelectionRule` over a single executor.
//!
//! # Score Convention
//! Lower score = dispatched first. Ties keep the lowest original index,
//! which is externally observable in the output order and must hold
//! exactly (the scan uses a strict comparison, not a sort).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use std::fmt::Debug;

use super::SimulationError;
use crate::models::{CompletedProcess, ProcessInput};

/// A rule for choosing among eligible processes.
///
/// Lower score = higher priority (dispatched first).
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Score for an eligible process. Lower wins; ties keep the lowest
    /// original index.
    fn score(&self, process: &ProcessInput) -> i64;
}

/// Shortest Job First: score by burst time.
///
/// Optimal for minimizing mean waiting time among non-preemptive
/// single-CPU policies (Smith, 1956).
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn score(&self, process: &ProcessInput) -> i64 {
        process.burst_time
    }
}

/// Priority scheduling: score by priority value, lower = more urgent.
#[derive(Debug, Clone, Copy)]
pub struct UrgentFirst;

impl SelectionRule for UrgentFirst {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn score(&self, process: &ProcessInput) -> i64 {
        process.priority
    }
}

/// Runs processes non-preemptively under a selection rule.
///
/// # Algorithm
/// 1. Scan unfinished processes with `arrival_time <= clock`; pick the
///    lowest score (strict `<`, so the first minimal index wins).
/// 2. Run the pick to completion; advance the clock by its burst.
/// 3. If nothing is eligible, jump the clock to the earliest pending
///    arrival instead of ticking one unit at a time — identical output,
///    bounded iteration.
///
/// A jump that cannot advance the clock is an internal invariant
/// violation and surfaces as [`SimulationError::Stalled`].
pub(crate) fn run_nonpreemptive(
    processes: &[ProcessInput],
    rule: &dyn SelectionRule,
) -> Result<Vec<CompletedProcess>, SimulationError> {
    let n = processes.len();
    let mut finished = vec![false; n];
    let mut completed = Vec::with_capacity(n);
    let mut clock: i64 = 0;

    while completed.len() < n {
        let mut selected: Option<usize> = None;
        let mut best = i64::MAX;

        for (i, p) in processes.iter().enumerate() {
            if !finished[i] && p.arrival_time <= clock && rule.score(p) < best {
                best = rule.score(p);
                selected = Some(i);
            }
        }

        match selected {
            Some(i) => {
                let p = &processes[i];
                completed.push(CompletedProcess::non_preemptive(p, clock));
                clock += p.burst_time;
                finished[i] = true;
            }
            None => match next_pending(processes, &finished) {
                Some(p) if p.arrival_time > clock => clock = p.arrival_time,
                Some(p) => {
                    return Err(SimulationError::Stalled {
                        process_id: p.id,
                        clock,
                    })
                }
                None => break,
            },
        }
    }

    Ok(completed)
}

/// Earliest-arriving unfinished process, if any.
fn next_pending<'a>(processes: &'a [ProcessInput], finished: &[bool]) -> Option<&'a ProcessInput> {
    processes
        .iter()
        .enumerate()
        .filter(|(i, _)| !finished[*i])
        .map(|(_, p)| p)
        .min_by_key(|p| p.arrival_time)
}
