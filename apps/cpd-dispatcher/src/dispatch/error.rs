//! Error types for dispatch operations.
//!
//! Only run-fatal conditions live here. A single job's failure is not an
//! error of the run; it is collected into the summary by the worker pool.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that abort a dispatcher run before or during setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Output directory creation failed for a reason other than the
    /// directory already existing.
    #[error("Failed to create output directory '{}': {message}", .path.display())]
    OutputDir {
        /// Path that could not be created.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The worker pool requires at least one worker.
    #[error("Invalid worker count {value}: at least one worker is required")]
    InvalidWorkerCount {
        /// The rejected value.
        value: usize,
    },

    /// The date range start falls after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Range start.
        start: NaiveDate,
        /// Range end.
        end: NaiveDate,
    },

    /// The worker thread pool could not be built.
    #[error("Failed to build worker pool: {message}")]
    WorkerPool {
        /// Error message.
        message: String,
    },

    /// The external job command names no program.
    #[error("Job command must name a program to execute")]
    EmptyJobCommand,
}
