//! Default instrument universe for dispatcher runs.

/// Liquid US large-cap tickers processed when no explicit universe is
/// configured. Order determines job submission order.
pub const DEFAULT_TICKERS: &[&str] = &[
    "AAPL", "MSFT", "AMZN", "GOOGL", "META", "NVDA", "TSLA", "BRK-B", "JPM", "JNJ", "V", "PG",
    "XOM", "UNH", "HD", "MA", "BAC", "DIS", "KO", "PEP", "PFE", "CSCO", "VZ", "INTC", "WMT",
    "CVX", "MRK", "T", "ORCL", "IBM",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_universe_has_no_duplicates() {
        let mut tickers: Vec<&str> = DEFAULT_TICKERS.to_vec();
        tickers.sort_unstable();
        tickers.dedup();

        assert_eq!(tickers.len(), DEFAULT_TICKERS.len());
    }

    #[test]
    fn default_universe_has_no_blank_entries() {
        assert!(DEFAULT_TICKERS.iter().all(|t| !t.trim().is_empty()));
    }
}
