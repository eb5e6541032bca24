//! Error types for search setup.
//!
//! A search itself never fails: it either finds the target or exhausts its
//! space. These errors cover invalid inputs rejected before any work starts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("counter radix must be at least 1")]
    ZeroRadix,

    #[error("Unknown strategy: '{0}'. Valid options: parallel, incremental")]
    UnknownStrategy(String),

    #[error("Unknown charset: '{0}'. Valid options: default, lower, upper, digits, symbols, alnum")]
    UnknownCharset(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
