//! Parallel fixed-length search.
//!
//! The space of candidates with exactly the target's length is split by the
//! value of the leading symbol. Each partition is owned by exactly one worker
//! thread; with fewer workers than symbols, partitions are dealt round-robin.
//!
//! # Architecture
//!
//! - A **coordinator** spawns the workers, collects their messages, and joins
//!   every thread before returning
//! - **Workers** walk their partitions with the mixed-radix counter
//! - A **shared claim flag** stops all workers once a match is found; the
//!   compare-and-swap on it guarantees a single reported result
//!
//! # Example
//!
//! ```
//! use keysweep::alphabet::Alphabet;
//! use keysweep::search::parallel::{ParallelConfig, run_parallel_search};
//!
//! let alphabet = Alphabet::new("ab").unwrap();
//! let config = ParallelConfig::default().with_workers(2);
//!
//! let parallel = run_parallel_search("ba", &alphabet, &config);
//! assert_eq!(parallel.result.found.as_deref(), Some("ba"));
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{
    MatchOrigin, ParallelResult, ParallelSearch, WorkerStatistics, run_parallel_search,
};
