//! Simulation domain models.
//!
//! Pure data types for CPU-scheduling simulation: the per-process input
//! record and the outcome records the engine derives from it. No
//! scheduling logic lives here.
//!
//! # Data Flow
//!
//! `ProcessInput` → engine → `CompletedProcess` → averages and
//! `TimelineInterval` projections, all bundled into one result value
//! per run.

mod outcome;
mod process;

pub use outcome::{CompletedProcess, TimelineInterval};
pub use process::{process_label, ProcessInput};
