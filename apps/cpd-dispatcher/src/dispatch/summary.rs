//! Aggregate result of a dispatcher run.

use serde::{Deserialize, Serialize};

use super::types::JobResult;

/// Aggregate outcome across every job of one dispatcher run.
///
/// The dispatcher takes no corrective action on failures; this summary is
/// the caller's observability into partial success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Individual job results.
    pub results: Vec<JobResult>,

    /// Number of jobs executed.
    pub jobs_executed: u64,

    /// Number of successful jobs.
    pub jobs_succeeded: u64,

    /// Number of failed jobs.
    pub jobs_failed: u64,

    /// Total run time in milliseconds.
    pub total_time_ms: u64,
}

impl DispatchSummary {
    /// Build a summary from collected job results.
    #[must_use]
    pub fn from_results(results: Vec<JobResult>, total_time_ms: u64) -> Self {
        let jobs_executed = results.len() as u64;
        let jobs_succeeded = results.iter().filter(|r| r.success).count() as u64;

        Self {
            jobs_failed: jobs_executed - jobs_succeeded,
            results,
            jobs_executed,
            jobs_succeeded,
            total_time_ms,
        }
    }

    /// Whether every job succeeded.
    #[must_use]
    pub const fn all_succeeded(&self) -> bool {
        self.jobs_failed == 0
    }

    /// Tickers whose jobs failed, in result order.
    #[must_use]
    pub fn failed_tickers(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.ticker.as_str())
            .collect()
    }

    /// Fraction of jobs that succeeded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.jobs_executed == 0 {
            0.0
        } else {
            self.jobs_succeeded as f64 / self.jobs_executed as f64
        }
    }
}
