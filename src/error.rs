//! Error types for spellreport.
//!
//! All fallible operations in the crate return [`Result`], whose error side is
//! the [`SpellReportError`] enum.
//!
//! # Examples
//!
//! ```
//! use spellreport::error::{SpellReportError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellReportError::dictionary("word list is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellreport operations.
#[derive(Error, Debug)]
pub enum SpellReportError {
    /// I/O errors (reading inputs, writing the archive, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No input documents were supplied.
    #[error("No input: {0}")]
    NoInput(String),

    /// The dictionary could not be loaded or queried.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Archive packaging errors
    #[error("Archive error: {0}")]
    Archive(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PDF object model errors
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// ZIP writer errors
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellReportError.
pub type Result<T> = std::result::Result<T, SpellReportError>;

impl SpellReportError {
    /// Create a new no-input error.
    pub fn no_input<S: Into<String>>(msg: S) -> Self {
        SpellReportError::NoInput(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SpellReportError::Dictionary(msg.into())
    }

    /// Create a new archive error.
    pub fn archive<S: Into<String>>(msg: S) -> Self {
        SpellReportError::Archive(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellReportError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellReportError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error means the dictionary oracle is unusable.
    pub fn is_dictionary_unavailable(&self) -> bool {
        matches!(self, SpellReportError::Dictionary(_))
    }
}
