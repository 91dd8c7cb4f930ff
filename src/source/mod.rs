//! Where the page's profile comes from.
//!
//! - The built-in sample profile (no file given)
//! - A TOML or JSON profile file, re-read on every [`ProfileSource::load`]

use crate::model::{Profile, ProfileError};
use std::path::PathBuf;
use tracing::info;

pub mod file;

pub use file::{load_profile_file, ProfileFormat};

/// Origin of the profile data.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// The sample profile compiled into the binary.
    Sample,
    /// A profile file on disk.
    File(PathBuf),
}

impl ProfileSource {
    /// Source for an optional profile path.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Sample,
        }
    }

    /// Load (or reload) the profile.
    ///
    /// # Errors
    ///
    /// File sources return [`ProfileError`] for missing, unreadable,
    /// malformed or invalid files. The sample never fails.
    pub fn load(&self) -> Result<Profile, ProfileError> {
        let profile = match self {
            ProfileSource::Sample => Profile::sample(),
            ProfileSource::File(path) => load_profile_file(path)?,
        };
        info!(source = %self.describe(), name = %profile.name, "profile loaded");
        Ok(profile)
    }

    /// Short human-readable description for logs and the status bar.
    pub fn describe(&self) -> String {
        match self {
            ProfileSource::Sample => "built-in sample".to_string(),
            ProfileSource::File(path) => path.display().to_string(),
        }
    }
}
