//! Core types for dispatch jobs and results.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::DispatchError;

/// Date format handed to the external job runner.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive calendar date range shared by every job in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a date range.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidDateRange` when `start` is after
    /// `end`. A single-day range (`start == end`) is valid.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DispatchError> {
        if start > end {
            return Err(DispatchError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range start.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Range end.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

/// One changepoint-detection job for a single instrument within a run.
///
/// Constructed once per run, consumed exactly once by the worker pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Instrument identifier.
    pub ticker: String,

    /// File the job writes its results to, unique within a run.
    pub output_path: PathBuf,

    /// First date of the history window.
    pub start_date: NaiveDate,

    /// Last date of the history window.
    pub end_date: NaiveDate,

    /// Lookback window length in trading days.
    pub lookback_window: u32,
}

impl JobSpec {
    /// Start date as an ISO-8601 string, the form the runner receives.
    #[must_use]
    pub fn start_iso(&self) -> String {
        self.start_date.format(ISO_DATE_FORMAT).to_string()
    }

    /// End date as an ISO-8601 string, the form the runner receives.
    #[must_use]
    pub fn end_iso(&self) -> String {
        self.end_date.format(ISO_DATE_FORMAT).to_string()
    }
}

/// Terminal outcome of one dispatched job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    /// Instrument identifier.
    pub ticker: String,

    /// File the job was asked to write.
    pub output_path: PathBuf,

    /// Wall-clock execution time in milliseconds.
    pub execution_time_ms: u64,

    /// Error message if the job failed.
    pub error: Option<String>,

    /// Whether the job completed successfully.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    #[test]
    fn test_date_range_rejects_reversed() {
        let result = DateRange::new(date("2021-12-31"), date("1990-01-01"));

        assert!(matches!(
            result,
            Err(DispatchError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_date_range_accepts_single_day() {
        let range = DateRange::new(date("2021-06-01"), date("2021-06-01")).unwrap();

        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_job_spec_iso_dates() {
        let spec = JobSpec {
            ticker: "AAPL".to_string(),
            output_path: PathBuf::from("data/cpd_21lbw/AAPL.csv"),
            start_date: date("1990-01-01"),
            end_date: date("2021-12-31"),
            lookback_window: 21,
        };

        assert_eq!(spec.start_iso(), "1990-01-01");
        assert_eq!(spec.end_iso(), "2021-12-31");
    }

    #[test]
    fn test_job_result_serialization() {
        let result = JobResult {
            ticker: "MSFT".to_string(),
            output_path: PathBuf::from("data/cpd_21lbw/MSFT.csv"),
            execution_time_ms: 500,
            error: Some("exit status 1".to_string()),
            success: false,
        };

        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("MSFT"));
        assert!(json.contains("exit status 1"));
    }
}
