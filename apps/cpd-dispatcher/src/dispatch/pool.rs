//! Bounded worker pool executing jobs through the injected runner.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{Level, debug, info, span, warn};

use crate::runner::JobRunner;

use super::error::DispatchError;
use super::progress::ProgressTracker;
use super::types::{JobResult, JobSpec};

/// A bounded pool of workers executing jobs via a `JobRunner`.
///
/// The pool is built per call on a local thread pool, so the bound applies
/// exactly and no global mutable pool state exists. Each worker blocks for
/// the full duration of one runner invocation.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    max_workers: usize,
}

impl WorkerPool {
    /// Create a pool bounded to `max_workers` concurrent jobs.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidWorkerCount` when `max_workers` is
    /// zero. The bound is a configuration value, never discovered from the
    /// host automatically.
    pub fn new(max_workers: usize) -> Result<Self, DispatchError> {
        if max_workers == 0 {
            return Err(DispatchError::InvalidWorkerCount { value: max_workers });
        }
        Ok(Self { max_workers })
    }

    /// Number of concurrently executing jobs this pool allows.
    #[must_use]
    pub const fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Run every job to a terminal state.
    ///
    /// Each specification is submitted exactly once. Execution order across
    /// jobs is unspecified; a failing job never cancels or blocks the
    /// others, its failure is recorded in the corresponding result instead.
    /// Blocks until all jobs have completed or failed, then returns one
    /// result per input spec.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::WorkerPool` when the thread pool itself
    /// cannot be built. Individual job failures are not errors.
    pub fn run_all<R>(&self, jobs: &[JobSpec], runner: &R) -> Result<Vec<JobResult>, DispatchError>
    where
        R: JobRunner + ?Sized,
    {
        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| DispatchError::WorkerPool {
                message: e.to_string(),
            })?;

        let tracker = Arc::new(ProgressTracker::new(jobs.len() as u64));

        info!(
            jobs = jobs.len(),
            workers = self.max_workers,
            "Dispatching jobs"
        );

        let results: Vec<JobResult> = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let result = Self::execute_job(job, runner);
                    tracker.job_completed(result.success);

                    let progress = tracker.snapshot();
                    debug!(
                        completed = progress.completed,
                        total = progress.total,
                        "Progress: {:.1}%",
                        progress.percentage()
                    );

                    result
                })
                .collect()
        });

        let progress = tracker.snapshot();
        info!(
            succeeded = progress.completed - progress.failed,
            failed = progress.failed,
            elapsed_secs = progress.elapsed_secs,
            "All jobs reached a terminal state ({:.1} jobs/s)",
            progress.jobs_per_sec
        );

        Ok(results)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn execute_job<R>(job: &JobSpec, runner: &R) -> JobResult
    where
        R: JobRunner + ?Sized,
    {
        let _span = span!(Level::DEBUG, "cpd_job", ticker = %job.ticker).entered();
        let start = Instant::now();

        let outcome = runner.run(job);
        let execution_time_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(()) => JobResult {
                ticker: job.ticker.clone(),
                output_path: job.output_path.clone(),
                execution_time_ms,
                error: None,
                success: true,
            },
            Err(e) => {
                warn!(ticker = %job.ticker, error = %e, "Job failed");
                JobResult {
                    ticker: job.ticker.clone(),
                    output_path: job.output_path.clone(),
                    execution_time_ms,
                    error: Some(e.to_string()),
                    success: false,
                }
            }
        }
    }
}
