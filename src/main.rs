//! Folio - Entry Point

use clap::Parser;
use folio::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ResolvedConfig,
};
use folio::model::AppError;
use folio::source::ProfileSource;
use folio::state::TypingOptions;
use folio::view::ViewOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Folio - a portfolio page for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A portfolio page for the terminal, with a typed-out tagline")]
pub struct Args {
    /// Profile file (.toml or .json); the built-in sample is shown if omitted
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Milliseconds between typed characters (must be positive)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub typing_delay: Option<u64>,

    /// Show the tagline at once instead of typing it out
    #[arg(long)]
    pub no_animation: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Flags that override the config file and environment.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            profile: self.profile.clone(),
            typing_delay_ms: self.typing_delay,
            animate: self.no_animation.then_some(false),
        }
    }
}

/// Resolve configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    Ok(apply_cli_overrides(with_env, args.overrides()))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    folio::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let options = ViewOptions {
        typing: TypingOptions {
            delay: config.typing_delay,
            animate: config.animate,
        },
        no_color: args.no_color,
    };

    folio::view::run_with_source(ProfileSource::from_path(config.profile), options)?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["folio", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["folio", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["folio"]);
        assert_eq!(args.profile, None);
        assert_eq!(args.config, None);
        assert_eq!(args.typing_delay, None);
        assert!(!args.no_animation);
        assert!(!args.no_color);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_profile_short_and_long() {
        let short = Args::parse_from(["folio", "-p", "me.toml"]);
        let long = Args::parse_from(["folio", "--profile", "me.json"]);
        assert_eq!(short.profile, Some(PathBuf::from("me.toml")));
        assert_eq!(long.profile, Some(PathBuf::from("me.json")));
    }

    #[test]
    fn test_typing_delay_rejects_zero() {
        let result = Args::try_parse_from(["folio", "--typing-delay", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_typing_delay_rejects_garbage() {
        let result = Args::try_parse_from(["folio", "--typing-delay", "fast"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["folio", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_flags_become_overrides() {
        let args = Args::parse_from([
            "folio",
            "--profile",
            "me.toml",
            "--typing-delay",
            "40",
            "--no-animation",
            "--no-color",
        ]);

        assert!(args.no_color);
        assert_eq!(
            args.overrides(),
            CliOverrides {
                profile: Some(PathBuf::from("me.toml")),
                typing_delay_ms: Some(40),
                animate: Some(false),
            }
        );
    }

    #[test]
    fn test_cli_delay_flows_through_precedence_chain() {
        let args = Args::parse_from(["folio", "--typing-delay", "25"]);

        let resolved = apply_cli_overrides(merge_config(None), args.overrides());

        assert_eq!(resolved.typing_delay, Duration::from_millis(25));
        assert!(resolved.animate);
        assert_eq!(resolved.profile, None);
    }
}
