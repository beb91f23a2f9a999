//! Progress tracking for dispatcher runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Tracks job completion across the workers of one run.
#[derive(Debug)]
pub struct ProgressTracker {
    total_jobs: u64,
    completed_jobs: AtomicU64,
    failed_jobs: AtomicU64,
    started_at: Instant,
}

impl ProgressTracker {
    /// Create a tracker for a run of `total_jobs` jobs.
    #[must_use]
    pub fn new(total_jobs: u64) -> Self {
        Self {
            total_jobs,
            completed_jobs: AtomicU64::new(0),
            failed_jobs: AtomicU64::new(0),
            started_at: Instant::now(),
        }
    }

    /// Record one job reaching a terminal state.
    pub fn job_completed(&self, success: bool) {
        self.completed_jobs.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.failed_jobs.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Current progress snapshot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn snapshot(&self) -> Progress {
        let completed = self.completed_jobs.load(Ordering::Relaxed);
        let failed = self.failed_jobs.load(Ordering::Relaxed);
        let elapsed = self.started_at.elapsed();

        let jobs_per_sec = if elapsed.as_secs_f64() > 0.0 {
            completed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Progress {
            total: self.total_jobs,
            completed,
            failed,
            elapsed_secs: elapsed.as_secs(),
            jobs_per_sec,
        }
    }
}

/// Point-in-time progress of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    /// Total number of jobs.
    pub total: u64,
    /// Jobs that reached a terminal state.
    pub completed: u64,
    /// Jobs that failed.
    pub failed: u64,
    /// Elapsed time in seconds.
    pub elapsed_secs: u64,
    /// Jobs processed per second.
    pub jobs_per_sec: f64,
}

impl Progress {
    /// Completion percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.completed as f64 / self.total as f64) * 100.0
        }
    }
}
