//! Incremental (length-increasing) exhaustive search
//!
//! Tries every candidate of length 1, then every candidate of length 2, and
//! so on up to the target length, on the calling thread. Shorter candidates
//! are always explored before longer ones.

use crate::alphabet::Alphabet;
use crate::search::candidate::{Odometer, matches, render};
use crate::search::config::SearchConfig;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::{Searcher, Strategy};
use std::time::Instant;
use tracing::{debug, info};

/// Single-threaded search over increasing candidate lengths
pub struct IncrementalSearch {
    statistics: SearchStatistics,
}

impl IncrementalSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Strategy::Incremental),
        }
    }
}

impl Default for IncrementalSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher for IncrementalSearch {
    fn search(
        &mut self,
        target: &str,
        alphabet: &Alphabet,
        _config: &SearchConfig,
    ) -> SearchResult {
        self.reset();
        let start_time = Instant::now();

        let target: Vec<char> = target.chars().collect();
        let radix = alphabet.len();
        self.statistics.workers = 1;

        info!(
            target_len = target.len(),
            alphabet_len = radix,
            "starting incremental search"
        );

        // The empty candidate is the whole length-0 space.
        if target.is_empty() {
            self.statistics.candidates_evaluated = 1;
            self.statistics.elapsed_time = start_time.elapsed();
            return SearchResult::with_match(String::new(), self.statistics.clone());
        }

        for length in 1..=target.len() {
            debug!(length, "searching length");
            self.statistics.max_length_tried = length;

            let mut odometer = Odometer::for_alphabet(length, alphabet);
            loop {
                self.statistics.candidates_evaluated += 1;
                let digits = odometer.current();
                if matches(digits, alphabet, &target) {
                    self.statistics.elapsed_time = start_time.elapsed();
                    info!(
                        candidates = self.statistics.candidates_evaluated,
                        "incremental search found a match"
                    );
                    return SearchResult::with_match(
                        render(digits, alphabet),
                        self.statistics.clone(),
                    );
                }
                if !odometer.step() {
                    break;
                }
            }
        }

        self.statistics.elapsed_time = start_time.elapsed();
        info!(
            candidates = self.statistics.candidates_evaluated,
            "incremental search exhausted without a match"
        );
        SearchResult::not_found(self.statistics.clone())
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Strategy::Incremental);
    }
}
