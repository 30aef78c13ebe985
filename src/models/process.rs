//! Process input model.
//!
//! A process is the unit of simulation: it becomes eligible at its
//! arrival time, requires a fixed CPU burst, and (for priority
//! scheduling) carries a priority value.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// A process submitted to a simulation run.
///
/// Immutable once constructed. Ids are 1-based and derived from input
/// order, so `P1` is the first process in the submitted arrays and the
/// id is stable for the whole run.
///
/// # Time Representation
/// All times are integer simulation units relative to t=0. The consumer
/// defines the unit (ticks, milliseconds, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// 1-based process identifier.
    pub id: usize,
    /// Time at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Total CPU time the process requires (> 0).
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Only consulted by the
    /// priority algorithm.
    pub priority: i64,
}

impl ProcessInput {
    /// Creates a process with the given id, arrival time, and burst time.
    pub fn new(id: usize, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Display label (`P1`, `P2`, ...).
    pub fn label(&self) -> String {
        process_label(self.id)
    }
}

/// Formats a process id as its display label (`P1`, `P2`, ...).
pub fn process_label(id: usize) -> String {
    format!("P{id}")
}
