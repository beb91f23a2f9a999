//! Job specification building.

use std::path::Path;

use super::types::{DateRange, JobSpec};

/// File extension for per-instrument result files.
const OUTPUT_EXTENSION: &str = "csv";

/// Build one job specification per instrument in the universe.
///
/// Pure and order-preserving: the output sequence follows the input
/// ordering, each spec carries the shared date range and lookback length,
/// and its output path is `output_dir/<ticker>.csv`. Output paths are
/// unique as long as tickers are. An empty universe yields an empty vector.
#[must_use]
pub fn build_job_specs(
    tickers: &[String],
    date_range: DateRange,
    lookback_window: u32,
    output_dir: &Path,
) -> Vec<JobSpec> {
    tickers
        .iter()
        .map(|ticker| JobSpec {
            ticker: ticker.clone(),
            output_path: output_dir.join(format!("{ticker}.{OUTPUT_EXTENSION}")),
            start_date: date_range.start(),
            end_date: date_range.end(),
            lookback_window,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::*;

    fn range() -> DateRange {
        DateRange::new(
            "1990-01-01".parse().unwrap(),
            "2021-12-31".parse().unwrap(),
        )
        .unwrap()
    }

    fn universe(tickers: &[&str]) -> Vec<String> {
        tickers.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_builds_one_spec_per_ticker() {
        let specs = build_job_specs(
            &universe(&["AAPL", "MSFT"]),
            range(),
            21,
            Path::new("data/cpd_21lbw"),
        );

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].ticker, "AAPL");
        assert_eq!(specs[0].output_path, PathBuf::from("data/cpd_21lbw/AAPL.csv"));
        assert_eq!(specs[0].start_iso(), "1990-01-01");
        assert_eq!(specs[0].end_iso(), "2021-12-31");
        assert_eq!(specs[0].lookback_window, 21);
        assert_eq!(specs[1].ticker, "MSFT");
        assert_eq!(specs[1].output_path, PathBuf::from("data/cpd_21lbw/MSFT.csv"));
    }

    #[test]
    fn test_preserves_universe_ordering() {
        let tickers = universe(&["MSFT", "AAPL", "GOOGL"]);

        let specs = build_job_specs(&tickers, range(), 21, Path::new("out"));

        let ordered: Vec<&str> = specs.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(ordered, vec!["MSFT", "AAPL", "GOOGL"]);
    }

    #[test]
    fn test_empty_universe_yields_empty_specs() {
        let specs = build_job_specs(&[], range(), 21, Path::new("out"));

        assert!(specs.is_empty());
    }

    proptest! {
        #[test]
        fn unique_tickers_yield_unique_output_paths(
            tickers in prop::collection::hash_set("[A-Z]{1,5}", 0..40)
        ) {
            let tickers: Vec<String> = tickers.into_iter().collect();

            let specs = build_job_specs(&tickers, range(), 21, Path::new("out"));

            prop_assert_eq!(specs.len(), tickers.len());
            let paths: HashSet<&PathBuf> = specs.iter().map(|s| &s.output_path).collect();
            prop_assert_eq!(paths.len(), specs.len());
            let spec_tickers: HashSet<&String> = specs.iter().map(|s| &s.ticker).collect();
            prop_assert_eq!(spec_tickers.len(), tickers.len());
        }
    }
}
