// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE       ← Config files (can repeat)
//! --no-default-config ← Skip ./envshim.toml
//! --log-level N       ← Console verbosity (0-6)
//! --file-log-level N  ← File verbosity (falls back to --log-level)
//! --log-file FILE     ← Log file path
//!
//! Precedence: CLI flags > ENVSHIM_* > config files > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::logging::{LogConfig, LogLevel};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML configuration file.
    /// Can be specified multiple times; later files override earlier ones.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Does not load `envshim.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Builds the logging configuration, CLI flags first, then `[global]`.
    #[must_use]
    pub fn log_config(&self, config: &Config) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(config.global.output_log_level);

        let file_level = self
            .file_log_level
            .or(self.log_level)
            .and_then(LogLevel::from_u8)
            .unwrap_or(config.global.file_log_level);

        let log_file = self
            .log_file
            .as_ref()
            .or(config.global.log_file.as_ref())
            .map(|p| p.display().to_string());

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(log_file)
            .with_file_format(config.global.log_format)
            .build()
    }
}
