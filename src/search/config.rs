//! Configuration types for search strategies

use crate::error::SearchError;
use crate::search::parallel::ParallelConfig;

/// Search strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Fixed-length search split across worker threads
    #[default]
    Parallel,
    /// Single-threaded search over lengths 1..=|target|
    Incremental,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Parallel => write!(f, "parallel"),
            Strategy::Incremental => write!(f, "incremental"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parallel" | "par" | "fixed" => Ok(Strategy::Parallel),
            "incremental" | "inc" | "sequential" => Ok(Strategy::Incremental),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Top-level search configuration
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Strategy to run
    pub strategy: Strategy,
    /// Parallel search parameters
    pub parallel: ParallelConfig,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }
}
