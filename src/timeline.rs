//! Gantt-chart timeline projection.
//!
//! Projects completed-process records into labeled `(start, end)`
//! intervals, order-preserving and 1:1. No algorithm-specific logic.

use crate::models::{CompletedProcess, TimelineInterval};

/// Builds chart intervals from completed records.
///
/// Each record maps to `[finish - burst, finish)` labeled `P{id}`. For
/// round-robin output this collapses a preempted process's slices into
/// one interval spanning its final stretch of work (documented
/// simplification; the per-slice history is not retained).
pub fn build_timeline(completed: &[CompletedProcess]) -> Vec<TimelineInterval> {
    completed
        .iter()
        .map(|c| TimelineInterval::new(c.label(), c.finish_time - c.burst_time, c.finish_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessInput;

    #[test]
    fn test_projection_is_order_preserving() {
        let records = vec![
            CompletedProcess::non_preemptive(&ProcessInput::new(2, 0, 3), 0),
            CompletedProcess::non_preemptive(&ProcessInput::new(1, 1, 4), 3),
        ];
        let timeline = build_timeline(&records);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0], TimelineInterval::new("P2", 0, 3));
        assert_eq!(timeline[1], TimelineInterval::new("P1", 3, 7));
    }

    #[test]
    fn test_preempted_record_collapses_to_one_interval() {
        // Arrived at 0, burst 4, finished at 8 after preemption: the
        // interval covers only the trailing burst-sized span.
        let record = CompletedProcess::preempted(&ProcessInput::new(1, 0, 4), 8, 0);
        let timeline = build_timeline(&[record]);
        assert_eq!(timeline, vec![TimelineInterval::new("P1", 4, 8)]);
    }

    #[test]
    fn test_empty() {
        assert!(build_timeline(&[]).is_empty());
    }
}
