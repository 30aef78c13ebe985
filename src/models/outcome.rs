//! Simulation outcome models.
//!
//! A `CompletedProcess` records when a process finished and the metrics
//! derived from that, one per input process. A `TimelineInterval` is the
//! Gantt-chart projection of a completed process.
//!
//! # Derived Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival (total time in system) |
//! | Waiting | turnaround - burst (time spent not running) |
//! | Response | arrival to first dispatch |
//!
//! For non-preemptive algorithms waiting and response coincide: a process
//! runs to completion once dispatched.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::process::{process_label, ProcessInput};

/// A finished process with its derived metrics.
///
/// The engine emits exactly one of these per input process. Invariants
/// for valid input: `finish_time >= arrival_time + burst_time` (equality
/// under non-preemptive algorithms), `wait_time >= 0`, `response_time >= 0`,
/// and `response_time <= wait_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// 1-based id of the input process.
    pub id: usize,
    /// Arrival time copied from the input.
    pub arrival_time: i64,
    /// Burst time copied from the input.
    pub burst_time: i64,
    /// Time at which the process completed.
    pub finish_time: i64,
    /// finish - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub wait_time: i64,
    /// Arrival to first dispatch.
    pub response_time: i64,
}

impl CompletedProcess {
    /// Record for a process that ran uninterrupted from `start_time`.
    ///
    /// Waiting and response times both equal `start_time - arrival_time`.
    pub fn non_preemptive(process: &ProcessInput, start_time: i64) -> Self {
        let finish_time = start_time + process.burst_time;
        let wait_time = start_time - process.arrival_time;
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            finish_time,
            turnaround_time: finish_time - process.arrival_time,
            wait_time,
            response_time: wait_time,
        }
    }

    /// Record for a process that may have been preempted.
    ///
    /// `response_time` is captured at first dispatch; waiting time is the
    /// total non-running time `turnaround - burst`.
    pub fn preempted(process: &ProcessInput, finish_time: i64, response_time: i64) -> Self {
        let turnaround_time = finish_time - process.arrival_time;
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            finish_time,
            turnaround_time,
            wait_time: turnaround_time - process.burst_time,
            response_time,
        }
    }

    /// Display label (`P1`, `P2`, ...).
    pub fn label(&self) -> String {
        process_label(self.id)
    }
}

/// A labeled `[start, end)` execution interval for Gantt-chart rendering.
///
/// Always `end > start`. A preempted process is rendered as the single
/// interval `[finish - burst, finish)`, collapsing its intermediate
/// slices (documented simplification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineInterval {
    /// Process label (`P1`, `P2`, ...).
    pub label: String,
    /// Interval start time.
    pub start: i64,
    /// Interval end time.
    pub end: i64,
}

impl TimelineInterval {
    /// Creates an interval.
    pub fn new(label: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Interval length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_preemptive_metrics() {
        let p = ProcessInput::new(2, 3, 10);
        let c = CompletedProcess::non_preemptive(&p, 7);
        assert_eq!(c.finish_time, 17);
        assert_eq!(c.turnaround_time, 14);
        assert_eq!(c.wait_time, 4);
        assert_eq!(c.response_time, 4);
        assert_eq!(c.label(), "P2");
    }

    #[test]
    fn test_non_preemptive_immediate_start() {
        let p = ProcessInput::new(1, 5, 8);
        let c = CompletedProcess::non_preemptive(&p, 5);
        assert_eq!(c.wait_time, 0);
        assert_eq!(c.response_time, 0);
        assert_eq!(c.finish_time, p.arrival_time + p.burst_time);
    }

    #[test]
    fn test_preempted_metrics() {
        // Arrives at 1, burst 3, finishes at 9, first dispatched at 2.
        let p = ProcessInput::new(3, 1, 3);
        let c = CompletedProcess::preempted(&p, 9, 1);
        assert_eq!(c.turnaround_time, 8);
        assert_eq!(c.wait_time, 5);
        assert_eq!(c.response_time, 1);
        assert!(c.response_time <= c.wait_time);
    }

    #[test]
    fn test_interval_duration() {
        let iv = TimelineInterval::new("P1", 4, 9);
        assert_eq!(iv.duration(), 5);
        assert_eq!(iv.label, "P1");
    }

    #[test]
    fn test_serde_round_trip() {
        let p = ProcessInput::new(1, 0, 4);
        let c = CompletedProcess::non_preemptive(&p, 0);
        let json = serde_json::to_string(&c).unwrap();
        let back: CompletedProcess = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
