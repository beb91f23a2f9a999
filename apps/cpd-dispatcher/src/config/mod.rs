//! Configuration for the changepoint-detection dispatcher.
//!
//! Settings are environment-variable driven with built-in defaults, so a
//! bare invocation reproduces the standard research run. Every value is
//! fixed for the duration of one run.
//!
//! # Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CPD_LOOKBACK_WINDOW` | `21` | Lookback window length (trading days) |
//! | `CPD_OUTPUT_ROOT` | `data` | Parent directory for run outputs |
//! | `CPD_MAX_WORKERS` | `1` | Worker pool size |
//! | `CPD_START_DATE` | `1990-01-01` | History start date (ISO-8601) |
//! | `CPD_END_DATE` | `2021-12-31` | History end date (ISO-8601) |
//! | `CPD_TICKERS` | built-in universe | Comma-separated universe override |
//! | `CPD_JOB_COMMAND` | `python -m cpd_yahoo` | External job command prefix |

mod universe;

pub use universe::DEFAULT_TICKERS;

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lookback window length in trading days.
pub const DEFAULT_LOOKBACK_WINDOW: u32 = 21;

/// Default worker pool size.
pub const DEFAULT_MAX_WORKERS: usize = 1;

/// Default parent directory for run output directories.
pub const DEFAULT_OUTPUT_ROOT: &str = "data";

/// Default history start date.
pub const DEFAULT_START_DATE: &str = "1990-01-01";

/// Default history end date.
pub const DEFAULT_END_DATE: &str = "2021-12-31";

/// Default external job command prefix.
pub const DEFAULT_JOB_COMMAND: &str = "python -m cpd_yahoo";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value '{value}' for {variable}: {message}")]
    InvalidValue {
        /// Environment variable name.
        variable: String,
        /// The offending raw value.
        value: String,
        /// Parse error message.
        message: String,
    },
}

/// Runtime configuration for one dispatcher run.
///
/// Immutable once a run starts; the lookback window determines the output
/// directory and is embedded in every job specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Lookback window length in trading days.
    pub lookback_window: u32,

    /// Maximum number of concurrently executing jobs.
    pub max_workers: usize,

    /// Parent directory for run output directories.
    pub output_root: PathBuf,

    /// First date of the shared history window.
    pub start_date: NaiveDate,

    /// Last date of the shared history window.
    pub end_date: NaiveDate,

    /// Ordered instrument universe, one job per entry.
    pub tickers: Vec<String>,

    /// External job command prefix (program plus leading arguments).
    pub job_command: Vec<String>,
}

impl DispatchConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a set variable cannot be
    /// parsed. Unset variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            lookback_window: env_parsed("CPD_LOOKBACK_WINDOW")?
                .unwrap_or(defaults.lookback_window),
            max_workers: env_parsed("CPD_MAX_WORKERS")?.unwrap_or(defaults.max_workers),
            output_root: std::env::var("CPD_OUTPUT_ROOT")
                .map_or(defaults.output_root, PathBuf::from),
            start_date: env_parsed("CPD_START_DATE")?.unwrap_or(defaults.start_date),
            end_date: env_parsed("CPD_END_DATE")?.unwrap_or(defaults.end_date),
            tickers: std::env::var("CPD_TICKERS")
                .map_or(defaults.tickers, |raw| parse_tickers(&raw)),
            job_command: std::env::var("CPD_JOB_COMMAND")
                .map_or(defaults.job_command, |raw| parse_command(&raw)),
        })
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            lookback_window: DEFAULT_LOOKBACK_WINDOW,
            max_workers: DEFAULT_MAX_WORKERS,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            start_date: default_date(DEFAULT_START_DATE),
            end_date: default_date(DEFAULT_END_DATE),
            tickers: DEFAULT_TICKERS.iter().map(|t| (*t).to_string()).collect(),
            job_command: parse_command(DEFAULT_JOB_COMMAND),
        }
    }
}

/// Parse a compile-time default date constant.
#[allow(clippy::expect_used)]
fn default_date(raw: &str) -> NaiveDate {
    raw.parse().expect("static default date is valid")
}

/// Read and parse an environment variable, `None` when unset.
fn env_parsed<T>(variable: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(variable) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                variable: variable.to_string(),
                value: raw,
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Split a comma-separated ticker list, dropping empty entries.
fn parse_tickers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Split a command line on whitespace.
fn parse_command(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatchConfig::default();

        assert_eq!(config.lookback_window, 21);
        assert_eq!(config.max_workers, 1);
        assert_eq!(config.output_root, PathBuf::from("data"));
        assert!(config.start_date < config.end_date);
        assert!(!config.tickers.is_empty());
        assert_eq!(config.job_command[0], "python");
    }

    #[test]
    fn test_default_universe_is_unique() {
        let config = DispatchConfig::default();
        let mut tickers = config.tickers.clone();
        tickers.sort();
        tickers.dedup();

        assert_eq!(tickers.len(), config.tickers.len());
    }

    #[test]
    fn test_parse_tickers_trims_and_drops_empty() {
        let tickers = parse_tickers("AAPL, MSFT ,,GOOGL,");

        assert_eq!(tickers, vec!["AAPL", "MSFT", "GOOGL"]);
    }

    #[test]
    fn test_parse_command_splits_on_whitespace() {
        let command = parse_command("python -m cpd_yahoo");

        assert_eq!(command, vec!["python", "-m", "cpd_yahoo"]);
    }

    #[test]
    fn test_parse_command_empty_input() {
        assert!(parse_command("   ").is_empty());
    }
}
