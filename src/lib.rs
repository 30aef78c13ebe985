//! CPU-scheduling simulation for the four classical algorithms.
//!
//! Computes per-process schedules, Gantt-chart timelines, and average
//! metrics for FCFS, non-preemptive SJF, non-preemptive priority
//! scheduling, and round-robin with a fixed quantum. Each run is a pure,
//! synchronous function from input arrays to an immutable result value;
//! parsing text fields and rendering tables or charts belong to the
//! consuming presentation layer.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessInput`, `CompletedProcess`,
//!   `TimelineInterval`
//! - **`engine`**: The four algorithm implementations behind one
//!   `simulate` entry point
//! - **`metrics`**: Mean turnaround / waiting / response times
//! - **`timeline`**: Gantt-chart interval projection
//! - **`validation`**: Input integrity checks (fail fast, all errors collected)
//! - **`input`**: Whitespace-separated number-field parsing
//! - **`export`**: CSV serialization of results
//!
//! # Example
//!
//! ```
//! use sched_sync::engine::{simulate, Algorithm, SimulationRequest};
//!
//! let request = SimulationRequest::from_arrays(
//!     Algorithm::RoundRobin { quantum: 2 },
//!     &[0, 1, 2],
//!     &[4, 3, 5],
//!     None,
//! ).unwrap();
//!
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.completed.len(), 3);
//! assert_eq!(result.timeline.len(), 3);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//!   Easy Pieces", Ch. 7: Scheduling
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod export;
pub mod input;
pub mod metrics;
pub mod models;
pub mod timeline;
pub mod validation;
