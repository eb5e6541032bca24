//! Search result types and statistics

use crate::search::config::Strategy;
use std::time::Duration;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The recovered string, if the target was reached
    pub found: Option<String>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    /// Create a result for a search that exhausted its space
    pub fn not_found(statistics: SearchStatistics) -> Self {
        Self {
            found: None,
            statistics,
        }
    }

    /// Create a result for a search that reached the target
    pub fn with_match(found: String, statistics: SearchStatistics) -> Self {
        Self {
            found: Some(found),
            statistics,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }

    /// Wall-clock duration of the search in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.statistics.elapsed_time.as_secs_f64()
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Strategy used for the search
    pub strategy: Strategy,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of candidates compared against the target
    pub candidates_evaluated: u64,
    /// Number of worker threads (1 for sequential search)
    pub workers: usize,
    /// Longest candidate length tried
    pub max_length_tried: usize,
}

impl SearchStatistics {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    /// Candidates per second, or 0.0 when no time was recorded
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }
}
