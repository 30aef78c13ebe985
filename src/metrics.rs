//! Aggregate simulation metrics.
//!
//! Computes arithmetic means of the per-process metrics over one run's
//! completed records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(arrival to first dispatch) |

use serde::{Deserialize, Serialize};

use crate::models::CompletedProcess;

/// Mean metrics across all completed processes of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
}

impl AverageMetrics {
    /// Computes averages over the completed records.
    ///
    /// Returns `None` for an empty sequence: there is no meaningful mean
    /// of zero processes, and the caller must present "no data" rather
    /// than a NaN division.
    pub fn calculate(completed: &[CompletedProcess]) -> Option<Self> {
        if completed.is_empty() {
            return None;
        }

        let mut turnaround: i64 = 0;
        let mut waiting: i64 = 0;
        let mut response: i64 = 0;

        for c in completed {
            turnaround += c.turnaround_time;
            waiting += c.wait_time;
            response += c.response_time;
        }

        let count = completed.len() as f64;
        Some(Self {
            avg_turnaround: turnaround as f64 / count,
            avg_waiting: waiting as f64 / count,
            avg_response: response as f64 / count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessInput;

    fn completed(id: usize, arrival: i64, burst: i64, start: i64) -> CompletedProcess {
        CompletedProcess::non_preemptive(&ProcessInput::new(id, arrival, burst), start)
    }

    #[test]
    fn test_averages_match_per_process_means() {
        // Turnarounds 5, 8, 16; waits 0, 5, 8.
        let records = vec![
            completed(1, 0, 5, 0),
            completed(2, 0, 3, 5),
            completed(3, 0, 8, 8),
        ];
        let avg = AverageMetrics::calculate(&records).unwrap();
        assert!((avg.avg_turnaround - 29.0 / 3.0).abs() < 1e-9);
        assert!((avg.avg_waiting - 13.0 / 3.0).abs() < 1e-9);
        assert!((avg.avg_response - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_record() {
        let avg = AverageMetrics::calculate(&[completed(1, 2, 4, 3)]).unwrap();
        assert!((avg.avg_turnaround - 5.0).abs() < 1e-9);
        assert!((avg.avg_waiting - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_yields_none() {
        assert!(AverageMetrics::calculate(&[]).is_none());
    }
}
