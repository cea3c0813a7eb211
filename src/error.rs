//! Error types for the Slavstem library.
//!
//! All errors are represented by the [`SlavstemError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use slavstem::error::{Result, SlavstemError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SlavstemError::invalid_config("unknown language"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Slavstem operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for specific error types.
#[derive(Error, Debug)]
pub enum SlavstemError {
    /// Analysis-related errors (filtering, stemmer selection, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (invalid filter settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SlavstemError.
pub type Result<T> = std::result::Result<T, SlavstemError>;

impl SlavstemError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SlavstemError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SlavstemError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SlavstemError::Other(msg.into())
    }
}
