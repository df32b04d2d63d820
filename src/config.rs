//! Configuration management for the rc.conf syntax checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Resolving arguments into a runtime configuration

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the syntax checker
#[derive(Debug, Parser)]
#[command(name = "rcconf-check")]
#[command(about = "Syntax checker for BSD-style rc.conf files")]
#[command(version)]
pub struct Args {
    /// Which config file to check for syntax errors
    #[arg(short, long, default_value = "/etc/rc.conf")]
    pub file: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Keep running and re-check whenever the file changes
    #[arg(long)]
    pub watch: bool,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How a validation result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Text,
    /// Machine-readable report for editor integration
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// File to check
    pub file: PathBuf,
    /// Report format
    pub format: ReportFormat,
    /// Whether to re-check the file on change
    pub watch: bool,
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
            file: args.file,
            format: args.format,
            watch: args.watch,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_arguments() {
        let args = Args::parse_from(["rcconf-check"]);
        let config = Config::from_args(args).expect("resolve config");

        assert_eq!(config.file, PathBuf::from("/etc/rc.conf"));
        assert_eq!(config.format, ReportFormat::Text);
        assert!(!config.watch);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn explicit_file_and_format() {
        let args = Args::parse_from(["rcconf-check", "-f", "/tmp/rc.conf", "--format", "json"]);
        let config = Config::from_args(args).expect("resolve config");

        assert_eq!(config.file, PathBuf::from("/tmp/rc.conf"));
        assert_eq!(config.format, ReportFormat::Json);
    }
}
