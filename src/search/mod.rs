//! Exhaustive search strategies
//!
//! Two strategies recover a target string over a given alphabet:
//! - Parallel: every candidate of exactly the target's length, split across
//!   worker threads by leading symbol
//! - Incremental: lengths 1, 2, ... up to the target's length, one at a time,
//!   on the calling thread

pub mod candidate;
pub mod config;
pub mod incremental;
pub mod parallel;
pub mod result;

pub use config::{SearchConfig, Strategy};
pub use incremental::IncrementalSearch;
pub use parallel::{ParallelConfig, ParallelSearch, run_parallel_search};
pub use result::{SearchResult, SearchStatistics};

use crate::alphabet::Alphabet;

/// Trait for strategies that search for a target over an alphabet
pub trait Searcher {
    /// Search for `target` among candidates drawn from `alphabet`
    ///
    /// # Arguments
    /// * `target` - The string to recover
    /// * `alphabet` - Symbols candidates are built from
    /// * `config` - Search configuration parameters
    ///
    /// # Returns
    /// A SearchResult with the recovered string (if any) and statistics
    fn search(
        &mut self,
        target: &str,
        alphabet: &Alphabet,
        config: &SearchConfig,
    ) -> SearchResult;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the search state for a new search
    fn reset(&mut self);
}

/// Build the searcher for a strategy.
pub fn searcher_for(strategy: Strategy) -> Box<dyn Searcher> {
    match strategy {
        Strategy::Parallel => Box::new(ParallelSearch::new()),
        Strategy::Incremental => Box::new(IncrementalSearch::new()),
    }
}

/// Run the strategy selected in `config`.
pub fn run(target: &str, alphabet: &Alphabet, config: &SearchConfig) -> SearchResult {
    searcher_for(config.strategy).search(target, alphabet, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_dispatches_on_strategy() {
        let alphabet = Alphabet::new("01").unwrap();

        let config = SearchConfig::default().with_strategy(Strategy::Incremental);
        let result = run("10", &alphabet, &config);
        assert_eq!(result.found.as_deref(), Some("10"));
        assert_eq!(result.statistics.strategy, Strategy::Incremental);

        let config = SearchConfig::default()
            .with_strategy(Strategy::Parallel)
            .with_parallel(ParallelConfig::default().with_workers(2));
        let result = run("10", &alphabet, &config);
        assert_eq!(result.found.as_deref(), Some("10"));
        assert_eq!(result.statistics.strategy, Strategy::Parallel);
    }
}
