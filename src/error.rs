//! Error types for the crate.
//!
//! Search itself never fails with an error: an unsolved run is an empty
//! action sequence. These errors cover the fallible edges around it, such as
//! parsing a layout, decoding a snapshot or validating a search config.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid card '{text}': {reason}")]
    InvalidCard { text: String, reason: String },

    #[error("invalid layout at line {line}: {message}")]
    InvalidLayout { line: usize, message: String },

    #[error("card {card} appears more than once in the layout")]
    DuplicateCard { card: String },

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
