//! Run orchestration: output resolution, spec building, execution.

use std::time::Instant;

use tracing::{info, warn};

use crate::config::DispatchConfig;
use crate::runner::JobRunner;

use super::error::DispatchError;
use super::output;
use super::pool::WorkerPool;
use super::specs;
use super::summary::DispatchSummary;
use super::types::DateRange;

/// Orchestrates one dispatcher run over the configured universe.
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    /// Create a dispatcher for the given configuration.
    #[must_use]
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// Configuration this dispatcher runs with.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Execute one run to completion.
    ///
    /// Validates the configuration, ensures the output directory exists,
    /// builds one job per instrument and executes them all on the worker
    /// pool, in that order. Blocks until every job reaches a terminal
    /// state, then returns the aggregate summary.
    ///
    /// # Errors
    ///
    /// Fails before any job is dispatched when the configuration is invalid
    /// (worker count below one, reversed date range) or when the output
    /// directory cannot be created. Validation precedes the first
    /// filesystem side effect, so a rejected run leaves no trace.
    /// Individual job failures never abort the run; they are collected in
    /// the returned summary.
    pub fn run<R>(&self, runner: &R) -> Result<DispatchSummary, DispatchError>
    where
        R: JobRunner + ?Sized,
    {
        let start = Instant::now();

        let date_range = DateRange::new(self.config.start_date, self.config.end_date)?;
        let pool = WorkerPool::new(self.config.max_workers)?;

        let output_dir =
            output::ensure_output_dir(&self.config.output_root, self.config.lookback_window)?;
        info!(
            output_dir = %output_dir.display(),
            lookback_window = self.config.lookback_window,
            "Resolved output directory"
        );

        let jobs = specs::build_job_specs(
            &self.config.tickers,
            date_range,
            self.config.lookback_window,
            &output_dir,
        );
        info!(jobs = jobs.len(), "Built job specifications");

        let results = pool.run_all(&jobs, runner)?;

        #[allow(clippy::cast_possible_truncation)]
        let total_time_ms = start.elapsed().as_millis() as u64;
        let summary = DispatchSummary::from_results(results, total_time_ms);

        if summary.all_succeeded() {
            info!(
                jobs = summary.jobs_executed,
                elapsed_ms = summary.total_time_ms,
                "Run complete"
            );
        } else {
            warn!(
                failed = summary.jobs_failed,
                tickers = ?summary.failed_tickers(),
                "Run complete with failures"
            );
        }

        Ok(summary)
    }
}
