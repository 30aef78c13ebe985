//! Round-robin scheduling with a fixed quantum.
//!
//! # Algorithm
//! A FIFO ready queue of process indices plus a remaining-burst counter
//! per process. The queue is seeded with processes arriving at t=0. Each
//! step dequeues the head, records its response time on first dispatch
//! only, runs it for `min(quantum, remaining)`, admits processes that
//! arrived during the slice, and finally re-enqueues the preempted
//! process behind them. When the queue is empty with work outstanding,
//! the clock jumps to the next pending arrival.
//!
//! Admission order matters: new arrivals are queued ahead of the process
//! that just ran, the FIFO fairness the rest of the crate's metrics
//! assume.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::SimulationError;
use crate::models::{CompletedProcess, ProcessInput};

pub(crate) fn run(
    processes: &[ProcessInput],
    quantum: i64,
) -> Result<Vec<CompletedProcess>, SimulationError> {
    let n = processes.len();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut first_response: Vec<Option<i64>> = vec![None; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut completed = Vec::with_capacity(n);
    let mut clock: i64 = 0;

    for (i, p) in processes.iter().enumerate() {
        if p.arrival_time == 0 {
            queue.push_back(i);
        }
    }

    while completed.len() < n {
        let Some(idx) = queue.pop_front() else {
            match next_pending(processes, &remaining) {
                Some(i) if processes[i].arrival_time > clock => {
                    clock = processes[i].arrival_time;
                    admit_arrivals(processes, &remaining, clock, None, &mut queue);
                }
                Some(i) => {
                    return Err(SimulationError::Stalled {
                        process_id: processes[i].id,
                        clock,
                    })
                }
                None => break,
            }
            continue;
        };

        let p = &processes[idx];
        if first_response[idx].is_none() {
            first_response[idx] = Some(clock - p.arrival_time);
        }

        let slice = quantum.min(remaining[idx]);
        remaining[idx] -= slice;
        clock += slice;

        admit_arrivals(processes, &remaining, clock, Some(idx), &mut queue);

        if remaining[idx] == 0 {
            completed.push(CompletedProcess::preempted(
                p,
                clock,
                first_response[idx].unwrap_or(0),
            ));
        } else {
            queue.push_back(idx);
        }
    }

    Ok(completed)
}

/// Queues every arrived, unfinished, not-yet-queued process in index
/// order, skipping the one that just ran (it re-enters behind them).
fn admit_arrivals(
    processes: &[ProcessInput],
    remaining: &[i64],
    clock: i64,
    running: Option<usize>,
    queue: &mut VecDeque<usize>,
) {
    for (i, p) in processes.iter().enumerate() {
        if Some(i) != running && p.arrival_time <= clock && remaining[i] > 0 && !queue.contains(&i)
        {
            queue.push_back(i);
        }
    }
}

/// Index of the earliest-arriving process with work remaining.
fn next_pending(processes: &[ProcessInput], remaining: &[i64]) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(i, _)| remaining[*i] > 0)
        .min_by_key(|(_, p)| p.arrival_time)
        .map(|(i, _)| i)
}
