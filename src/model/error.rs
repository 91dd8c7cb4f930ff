//! Error types for folio.
//!
//! Errors are `thiserror` enums that compose through `?` and `From`:
//!
//! - [`AppError`] - top-level error returned by the binary
//!   - [`ProfileError`] - profile file could not be read, parsed or validated
//!   - [`ConfigError`](crate::config::ConfigError) - config file problems
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - `std::io::Error` - terminal failures
//!
//! Profile errors during a live reload are non-fatal: the page keeps the
//! profile it already has and reports the error in the status bar.

use crate::model::profile::InvalidProfile;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The profile could not be loaded.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// The config file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, drawing or teardown failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures loading a profile from disk.
///
/// Each variant carries the path so messages can point at the file.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file does not exist.
    #[error("Profile not found: {path}")]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read profile {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    Toml {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Invalid JSON.
    #[error("Invalid JSON in {path}: {reason}")]
    Json {
        /// Path with invalid JSON.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Extension is neither `.toml` nor `.json`.
    #[error("Unsupported profile format for {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: PathBuf,
    },

    /// Parsed, but breaks an invariant the page relies on.
    #[error("Invalid profile {path}: {reason}")]
    Invalid {
        /// Path of the rejected profile.
        path: PathBuf,
        /// Which invariant failed.
        #[source]
        reason: InvalidProfile,
    },
}

impl ProfileError {
    /// Path of the profile file involved.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ProfileError::NotFound { path }
            | ProfileError::Read { path, .. }
            | ProfileError::Toml { path, .. }
            | ProfileError::Json { path, .. }
            | ProfileError::UnsupportedFormat { path }
            | ProfileError::Invalid { path, .. } => path,
        }
    }
}
