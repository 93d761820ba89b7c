//! Error types for design-patterns-rs.
//!
//! A single `thiserror`-derived enum shared by every pattern crate.

use thiserror::Error;

/// The top-level error type used throughout design-patterns-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// The receiver does not support the requested operation.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Writing to an output sink failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout design-patterns-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
