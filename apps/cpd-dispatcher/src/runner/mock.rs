//! Recording job runner for testing.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::dispatch::JobSpec;

use super::{JobError, JobRunner};

/// Recording fake runner for testing.
///
/// Records every job specification it receives and can be scripted to fail
/// for selected tickers.
#[derive(Debug, Default)]
pub struct MockJobRunner {
    fail_tickers: HashSet<String>,
    invocations: Mutex<Vec<JobSpec>>,
}

impl MockJobRunner {
    /// Create a runner that succeeds for every job.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that fails for the given tickers.
    #[must_use]
    pub fn failing_for<I, S>(tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fail_tickers: tickers.into_iter().map(Into::into).collect(),
            invocations: Mutex::new(vec![]),
        }
    }

    /// Number of jobs this runner has been invoked with.
    #[must_use]
    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }

    /// All job specifications received so far, in invocation order.
    #[must_use]
    pub fn invocations(&self) -> Vec<JobSpec> {
        self.invocations.lock().unwrap().clone()
    }
}

impl JobRunner for MockJobRunner {
    fn run(&self, job: &JobSpec) -> Result<(), JobError> {
        self.invocations.lock().unwrap().push(job.clone());

        if self.fail_tickers.contains(&job.ticker) {
            Err(JobError::Failed { code: 1 })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn job(ticker: &str) -> JobSpec {
        JobSpec {
            ticker: ticker.to_string(),
            output_path: PathBuf::from(format!("out/{ticker}.csv")),
            start_date: "1990-01-01".parse().unwrap(),
            end_date: "2021-12-31".parse().unwrap(),
            lookback_window: 21,
        }
    }

    #[test]
    fn records_invocations_in_order() {
        let runner = MockJobRunner::new();

        runner.run(&job("AAPL")).unwrap();
        runner.run(&job("MSFT")).unwrap();

        assert_eq!(runner.invocation_count(), 2);
        assert_eq!(runner.invocations()[0].ticker, "AAPL");
        assert_eq!(runner.invocations()[1].ticker, "MSFT");
    }

    #[test]
    fn scripted_failure_only_hits_selected_tickers() {
        let runner = MockJobRunner::failing_for(["MSFT"]);

        assert!(runner.run(&job("AAPL")).is_ok());
        assert_eq!(runner.run(&job("MSFT")), Err(JobError::Failed { code: 1 }));
        assert_eq!(runner.invocation_count(), 2);
    }
}
