//! CPD Dispatcher Binary
//!
//! Runs the external changepoint-detection computation for every instrument
//! in the configured universe and collects the results under one
//! window-specific output directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin cpd-dispatcher           # default lookback window
//! cargo run --bin cpd-dispatcher -- 63     # explicit lookback window
//! ```
//!
//! # Environment Variables
//!
//! All optional:
//! - `CPD_LOOKBACK_WINDOW`: lookback window length in trading days (default: 21)
//! - `CPD_OUTPUT_ROOT`: parent directory for run outputs (default: data)
//! - `CPD_MAX_WORKERS`: worker pool size (default: 1)
//! - `CPD_START_DATE`: history start date, ISO-8601 (default: 1990-01-01)
//! - `CPD_END_DATE`: history end date, ISO-8601 (default: 2021-12-31)
//! - `CPD_TICKERS`: comma-separated universe override
//! - `CPD_JOB_COMMAND`: external job command prefix (default: python -m cpd_yahoo)
//! - `RUST_LOG`: log level (default: info)

use anyhow::Context;
use cpd_dispatcher::{DispatchConfig, Dispatcher, SubprocessRunner};

fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting CPD dispatcher");

    let mut config = DispatchConfig::from_env()?;
    if let Some(lookback) = parse_lookback_arg()? {
        config.lookback_window = lookback;
    }
    log_config(&config);

    let runner = SubprocessRunner::new(&config.job_command)?;
    let dispatcher = Dispatcher::new(config);
    let summary = dispatcher.run(&runner)?;

    if summary.all_succeeded() {
        tracing::info!(
            jobs = summary.jobs_executed,
            elapsed_ms = summary.total_time_ms,
            "All jobs succeeded"
        );
    } else {
        tracing::warn!(
            failed = summary.jobs_failed,
            tickers = ?summary.failed_tickers(),
            "Some jobs failed"
        );
    }

    Ok(())
}

/// Load a .env file from the current directory if one exists.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant guaranteed
/// to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "cpd_dispatcher=info"
                    .parse()
                    .expect("static directive 'cpd_dispatcher=info' is valid"),
            ),
        )
        .init();
}

/// Parse the optional positional lookback-window argument.
fn parse_lookback_arg() -> anyhow::Result<Option<u32>> {
    match std::env::args().nth(1) {
        Some(raw) => {
            let lookback = raw
                .parse::<u32>()
                .with_context(|| format!("invalid lookback window argument '{raw}'"))?;
            Ok(Some(lookback))
        }
        None => Ok(None),
    }
}

/// Log the parsed configuration.
fn log_config(config: &DispatchConfig) {
    tracing::info!(
        lookback_window = config.lookback_window,
        max_workers = config.max_workers,
        output_root = %config.output_root.display(),
        start_date = %config.start_date,
        end_date = %config.end_date,
        tickers = config.tickers.len(),
        "Configuration loaded"
    );
}
