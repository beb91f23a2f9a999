//! Job runner port and adapters.
//!
//! The changepoint-detection computation is an external collaborator behind
//! the `JobRunner` trait: the dispatch core hands it a job specification
//! and observes only a completion signal, never the output file's contents.
//! Injecting the runner keeps the core testable with a fake and portable
//! across execution strategies (in-process call, subprocess, remote task).

mod mock;
mod subprocess;

pub use mock::MockJobRunner;
pub use subprocess::SubprocessRunner;

use thiserror::Error;

use crate::dispatch::JobSpec;

/// Failure signal from a single job invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobError {
    /// The job could not be launched at all.
    #[error("Failed to launch job: {message}")]
    Launch {
        /// Error message.
        message: String,
    },

    /// The job ran and reported failure.
    #[error("Job exited with status {code}")]
    Failed {
        /// Process exit code.
        code: i32,
    },

    /// The job was terminated without an exit code.
    #[error("Job terminated by signal")]
    Terminated,
}

/// External changepoint-detection computation, invoked once per job.
///
/// Implementations receive the instrument, output path, ISO-8601 date range
/// and lookback length through the specification. A worker blocks for the
/// full duration of one invocation, so implementations are expected to be
/// long-running and must be safe to call from multiple workers at once.
pub trait JobRunner: Send + Sync {
    /// Run one job to a terminal state.
    ///
    /// # Errors
    ///
    /// Returns a `JobError` describing why the invocation failed. The
    /// dispatch core isolates this failure to the job's own result.
    fn run(&self, job: &JobSpec) -> Result<(), JobError>;
}
