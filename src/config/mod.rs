pub mod cli;
pub mod toml_config;

use crate::core::{EncodingPolicy, TransformMode};
use crate::utils::error::{CaserError, Result};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "caser")]
#[command(about = "Convert text from stdin to uppercase, lowercase, or inverted case")]
pub struct CliConfig {
    /// Conversion to apply: upper, lower, or invert
    #[arg(value_name = "MODE")]
    pub mode: Option<TransformMode>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "CASER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject malformed UTF-8 instead of replacing it with U+FFFD
    #[arg(long)]
    pub strict: bool,

    /// Print a JSON conversion report on stderr
    #[arg(long)]
    pub json: bool,

    /// Suppress the confirmation message
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List the available modes and exit
    #[arg(long)]
    pub list_modes: bool,
}

/// Effective settings after merging the command line over the config file.
/// `log_level` comes from the file, which `resolve` has already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub mode: TransformMode,
    pub encoding: EncodingPolicy,
    pub quiet: bool,
    pub json: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn merge(
        mode: Option<TransformMode>,
        strict: bool,
        quiet: bool,
        json: bool,
        verbose: bool,
        file: &TomlConfig,
    ) -> Result<Self> {
        let mode = mode
            .or(file.default_mode())
            .ok_or(CaserError::MissingModeError)?;

        let encoding = if strict {
            EncodingPolicy::Strict
        } else {
            file.encoding()
        };

        Ok(Self {
            mode,
            encoding,
            quiet: quiet || file.quiet(),
            json,
            verbose,
            log_level: file.log_level().map(str::to_string),
        })
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file.validate()?;

        Self::merge(cli.mode, cli.strict, cli.quiet, cli.json, cli.verbose, &file)
    }
}
