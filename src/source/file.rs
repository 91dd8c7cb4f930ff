//! Profile files on disk.
//!
//! The format is chosen from the extension: `.toml` or `.json`.

use crate::model::{Profile, ProfileError};
use std::path::Path;
use tracing::debug;

/// Supported profile file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ProfileFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse profile text in this format.
    ///
    /// `path` is only used for error messages.
    pub fn parse(self, contents: &str, path: &Path) -> Result<Profile, ProfileError> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| ProfileError::Toml {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            Self::Json => serde_json::from_str(contents).map_err(|e| ProfileError::Json {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Read, parse and validate a profile file.
///
/// # Errors
///
/// - `NotFound` if the path does not exist
/// - `UnsupportedFormat` for extensions other than `.toml`/`.json`
/// - `Read` for I/O failures
/// - `Toml`/`Json` for syntax errors or unknown fields
/// - `Invalid` if the profile breaks [`Profile::validate`]
pub fn load_profile_file(path: &Path) -> Result<Profile, ProfileError> {
    if !path.exists() {
        return Err(ProfileError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let format = ProfileFormat::from_path(path).ok_or_else(|| ProfileError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let profile = format.parse(&contents, path)?;
    profile.validate().map_err(|reason| ProfileError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    debug!(
        path = %path.display(),
        ?format,
        projects = profile.projects.len(),
        "profile file parsed"
    );
    Ok(profile)
}
