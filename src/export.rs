//! CSV serialization of simulation results.
//!
//! A pure projection of a [`SimulationResult`] into CSV text: one row
//! per completed process plus a trailing averages row. Carries no
//! simulation logic.

use crate::engine::SimulationResult;

/// Column headers, in row order.
pub const CSV_HEADER: &str =
    "Process,Arrival Time,Burst Time,Finish Time,Turnaround Time,Waiting Time,Response Time";

/// Renders a result as CSV.
///
/// Per-process rows appear in completion order; averages are appended as
/// an `Average` row with two-decimal values. When the run had no
/// processes the output is the header line alone.
pub fn to_csv(result: &SimulationResult) -> String {
    let mut lines = Vec::with_capacity(result.completed.len() + 2);
    lines.push(CSV_HEADER.to_string());

    for c in &result.completed {
        lines.push(format!(
            "{},{},{},{},{},{},{}",
            c.label(),
            c.arrival_time,
            c.burst_time,
            c.finish_time,
            c.turnaround_time,
            c.wait_time,
            c.response_time
        ));
    }

    if let Some(avg) = &result.averages {
        lines.push(format!(
            "Average,,,,{:.2},{:.2},{:.2}",
            avg.avg_turnaround, avg.avg_waiting, avg.avg_response
        ));
    }

    lines.join("\n")
}
