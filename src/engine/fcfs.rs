//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//! Sort by arrival time (stable, so arrival ties keep input order) and
//! run each process to completion. A process starts at
//! `max(clock, arrival)`; idle time accrues implicitly through the `max`.
//!
//! O(n log n), no preemption.

use crate::models::{CompletedProcess, ProcessInput};

pub(crate) fn run(processes: &[ProcessInput]) -> Vec<CompletedProcess> {
    let mut order: Vec<&ProcessInput> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time);

    let mut completed = Vec::with_capacity(order.len());
    let mut clock: i64 = 0;

    for p in order {
        let start = clock.max(p.arrival_time);
        completed.push(CompletedProcess::non_preemptive(p, start));
        clock = start + p.burst_time;
    }

    completed
}
