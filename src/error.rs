//! Unified error types for the byteflip crate.
//!
//! The error surface is deliberately small: the swap kernel itself cannot
//! fail, so every error is an argument problem caught before any write.

use thiserror::Error;

use crate::ise::VectorClass;

/// Main error type for byteflip operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer shape does not match the declared element kind.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A forced vector class cannot run on this CPU or target.
    #[error("vector class {0:?} is not supported on this CPU")]
    Unsupported(VectorClass),
}

/// Result type for byteflip operations.
pub type Result<T> = std::result::Result<T, Error>;
