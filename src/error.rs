//! Error types for the blur library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BlurError`] enum. Expected preconditions (an out-of-range edit distance,
//! heuristic setup on an inner node) are reported through it rather than by
//! panicking.
//!
//! # Examples
//!
//! ```
//! use blur::error::{BlurError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BlurError::invalid_argument("edit distance must be 0, 1 or 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for blur operations.
#[derive(Error, Debug)]
pub enum BlurError {
    /// I/O errors (dictionary files, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument outside the supported domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation invoked on a value in the wrong state
    #[error("Invalid state: {0}")]
    State(String),

    /// Not implemented
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BlurError.
pub type Result<T> = std::result::Result<T, BlurError>;

impl BlurError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BlurError::InvalidArgument(msg.into())
    }

    /// Create a new state error.
    pub fn state<S: Into<String>>(msg: S) -> Self {
        BlurError::State(msg.into())
    }

    /// Create a new not implemented error.
    pub fn not_implemented<S: Into<String>>(msg: S) -> Self {
        BlurError::NotImplemented(msg.into())
    }
}
