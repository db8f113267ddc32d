// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envshim.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, [EnvVar]
//! GlobalConfig: overwrite (default for [[env]]), log levels, log file and format
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel};

/// Global options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Overwrite flag for `[[env]]` entries that don't set their own.
    pub overwrite: bool,
    /// Console log level (0-6).
    pub output_log_level: LogLevel,
    /// Log file level (0-6).
    pub file_log_level: LogLevel,
    /// Log file path, no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Log file line format, `text` or `json`.
    pub log_format: LogFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            overwrite: true,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_format: LogFormat::Text,
        }
    }
}
