//! Unified error types for chatlens.
//!
//! The parsing core itself has no fatal conditions: malformed lines and
//! incomplete markup blocks degrade to "fewer records", never to errors.
//! [`ChatlensError`] covers the boundaries around the core: file I/O,
//! serialization, and invalid CLI input.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the input file doesn't exist or
    /// cannot be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The parser's internal grammar failed to compile.
    ///
    /// The line regexes and the markup selector table are static format
    /// constants, so this indicates a defect rather than bad input.
    #[error("Invalid {format} format definition: {message}")]
    InvalidFormat {
        /// The export format being parsed (e.g., "WhatsApp TXT")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An alias mapping argument that isn't of the form `NAME=DISPLAY`.
    #[error("Invalid alias '{input}'. Expected format: NAME=DISPLAY")]
    InvalidAlias {
        /// The invalid alias string that was provided
        input: String,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the canonical collection as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatlensError {
    /// Creates an [`InvalidFormat`](ChatlensError::InvalidFormat) error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }
}
