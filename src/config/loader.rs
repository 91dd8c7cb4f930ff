//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "FOLIO_CONFIG";
/// Environment variable naming the profile file.
pub const ENV_PROFILE: &str = "FOLIO_PROFILE";
/// Environment variable overriding the typing delay in milliseconds.
pub const ENV_TYPING_DELAY_MS: &str = "FOLIO_TYPING_DELAY_MS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Milliseconds between two typed characters.
    #[serde(default)]
    pub typing_delay_ms: Option<u64>,

    /// Whether the tagline is typed out (`false` shows it at once).
    #[serde(default)]
    pub animate: Option<bool>,

    /// Profile file to show instead of the built-in sample.
    #[serde(default)]
    pub profile: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Delay between typed characters.
    pub typing_delay: Duration,
    /// Whether the tagline is animated.
    pub animate: bool,
    /// Profile file; `None` means the built-in sample.
    pub profile: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            typing_delay: crate::typing::DEFAULT_TICK_DELAY,
            animate: true,
            profile: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Linux, the platform equivalent
/// elsewhere, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. A zero delay is treated as unset (with a warning).
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let typing_delay = match config.typing_delay_ms {
        Some(0) => {
            tracing::warn!(value = 0, "ignoring invalid typing_delay_ms in config file");
            defaults.typing_delay
        }
        Some(ms) => Duration::from_millis(ms),
        None => defaults.typing_delay,
    };

    ResolvedConfig {
        typing_delay,
        animate: config.animate.unwrap_or(defaults.animate),
        profile: config.profile.or(defaults.profile),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FOLIO_PROFILE`: profile file path
/// - `FOLIO_TYPING_DELAY_MS`: typing delay; ignored (with a warning) unless
///   it is a positive integer
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(profile) = std::env::var(ENV_PROFILE) {
        config.profile = Some(PathBuf::from(profile));
    }

    if let Ok(raw) = std::env::var(ENV_TYPING_DELAY_MS) {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => config.typing_delay = Duration::from_millis(ms),
            _ => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_TYPING_DELAY_MS),
        }
    }

    config
}

/// CLI flags that can override configuration.
///
/// Each field is `None` unless the user passed the flag explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--profile <PATH>`
    pub profile: Option<PathBuf>,
    /// `--typing-delay <MS>`
    pub typing_delay_ms: Option<u64>,
    /// `--no-animation` (only ever `Some(false)`)
    pub animate: Option<bool>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(profile) = cli.profile {
        config.profile = Some(profile);
    }

    if let Some(ms) = cli.typing_delay_ms.filter(|ms| *ms > 0) {
        config.typing_delay = Duration::from_millis(ms);
    }

    if let Some(animate) = cli.animate {
        config.animate = animate;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
