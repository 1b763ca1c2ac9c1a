//! Configuration management for the file-line-validator server.
//!
//! Handles:
//! - Command-line argument parsing
//! - Ruleset file resolution

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::rules::RulesetFile;

/// Command-line arguments for the validation server
#[derive(Debug, Parser)]
#[command(name = "file-line-validator")]
#[command(about = "Line-by-line validation server for structured record files")]
#[command(version)]
pub struct Args {
    /// Path to a ruleset TOML file overriding the embedded default
    #[arg(long, help = "Ruleset TOML file defining the ordered list of rules")]
    pub ruleset: Option<PathBuf>,

    /// Address the HTTP server binds to
    #[arg(long, default_value = "127.0.0.1:8080", help = "Listen address")]
    pub listen: SocketAddr,

    /// Log level for the server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Ruleset file explicitly set via command line
    pub ruleset_path: Option<PathBuf>,
    /// Listen address
    pub listen: SocketAddr,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            ruleset_path: args.ruleset,
            listen: args.listen,
            log_level: args.log_level,
        })
    }

    /// Load the active ruleset: the configured file, or the embedded default.
    pub fn load_ruleset(&self) -> Result<RulesetFile> {
        match &self.ruleset_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading ruleset file {}", path.display()))?;
                RulesetFile::from_toml(&raw)
                    .with_context(|| format!("in ruleset file {}", path.display()))
            }
            None => RulesetFile::embedded_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(ruleset: Option<PathBuf>) -> Args {
        Args {
            ruleset,
            listen: "127.0.0.1:8080".parse().expect("valid address"),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_config_without_ruleset_uses_embedded_default() {
        let config = Config::from_args(args(None)).expect("create config");
        let ruleset = config.load_ruleset().expect("load embedded ruleset");

        assert_eq!(ruleset.ruleset.name, "account-records");
    }

    #[test]
    fn test_config_reports_missing_ruleset_file() {
        let config = Config::from_args(args(Some(PathBuf::from("/nonexistent/rules.toml"))))
            .expect("create config");

        let err = config.load_ruleset().expect_err("missing file must fail");
        assert!(err.to_string().contains("/nonexistent/rules.toml"));
    }
}
