//! Centralized error handling for sysgrab

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for sysgrab operations
#[derive(Debug, Error)]
pub enum SysgrabError {
    /// A source file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A subprocess could not be started or did not succeed
    #[error("command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },
    /// The source was readable but held no usable value
    #[error("{0} not available")]
    Unavailable(String),
    /// No integer at the start of the text
    #[error("no integer found in '{0}'")]
    NoDigits(String),
    /// Integer does not fit the target type
    #[error("integer out of range in '{0}'")]
    OutOfRange(String),
    /// No floating-point number at the start of the text
    #[error("no number found in '{0}'")]
    NoNumber(String),
    /// Rejected color value
    #[error("Invalid value: {0}. Expected format: r,g,b with each component between 0 and 255.")]
    ConfigMalformed(String),
    /// Art or config file could not be created on first run
    #[error("failed to create {}: {source}", .path.display())]
    ResourceCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Any other I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SysgrabError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SysgrabError::NotFound {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SysgrabError::ResourceCreation {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Results in sysgrab
pub type Result<T> = std::result::Result<T, SysgrabError>;
