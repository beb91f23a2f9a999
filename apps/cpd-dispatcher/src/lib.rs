// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! CPD Dispatcher - Rust Core Library
//!
//! Batch dispatcher that runs an independent changepoint-detection
//! computation for every instrument in a fixed universe, over a shared
//! historical date range and a configurable lookback window length, writing
//! one result file per instrument into a window-specific output directory.
//!
//! # Architecture
//!
//! The dispatch core is a small pipeline of independently testable units:
//!
//! - **Config** (`config`): environment-driven run settings with built-in
//!   defaults (universe, date range, lookback window, worker count).
//! - **Dispatch** (`dispatch`): the core pipeline —
//!   - `output`: deterministic, idempotent output-directory resolution
//!   - `specs`: pure job-specification building over the universe
//!   - `pool`: bounded worker pool with isolated per-job failure
//!   - `dispatcher`: orchestration and the aggregate run summary
//! - **Runner** (`runner`): the external changepoint-detection computation
//!   behind the `JobRunner` port, with a subprocess adapter for production
//!   and a recording mock for tests.
//!
//! The computation itself is an external collaborator: the dispatcher hands
//! it a ticker, an output path, an ISO-8601 date range and the lookback
//! length, and observes only a completion signal.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Run configuration - environment loading, defaults, instrument universe.
pub mod config;

/// Dispatch core - output resolution, job specs, worker pool, orchestration.
pub mod dispatch;

/// Job runner port and adapters.
pub mod runner;

// Config re-exports
pub use config::{ConfigError, DispatchConfig};

// Dispatch re-exports
pub use dispatch::{
    DateRange, DispatchError, DispatchSummary, Dispatcher, JobResult, JobSpec, Progress,
    ProgressTracker, WorkerPool,
};

// Runner re-exports
pub use runner::{JobError, JobRunner, MockJobRunner, SubprocessRunner};
