//! Exhaustive search over a finite alphabet.
//!
//! Recovers a target string by enumerating candidates as a mixed-radix
//! counter over the alphabet, either in parallel at the target's exact length
//! or sequentially over increasing lengths.

pub mod alphabet;
pub mod error;
pub mod search;

pub use alphabet::{Alphabet, Charset};
pub use error::SearchError;
pub use search::{SearchConfig, SearchResult, SearchStatistics, Searcher, Strategy};
