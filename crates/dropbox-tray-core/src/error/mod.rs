use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Status and configuration errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Dropbox info file does not exist.
    #[error("Dropbox info file not found at path: {path:?} {location}")]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Dropbox info file could not be read or lacks `personal.path`.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The status command could not be spawned or its output read.
    #[error("Status command `{program}` failed: {source} {location}")]
    StatusCommandFailed {
        /// Program that was invoked.
        program: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
