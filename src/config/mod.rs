// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envshim.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config files, in order
//! 3. envshim.toml (cwd, unless --no-default-config)
//! 4. ENVSHIM_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVSHIM_GLOBAL__OVERWRITE=false      → global.overwrite = false
//! ENVSHIM_GLOBAL__OUTPUT_LOG_LEVEL=4   → global.output_log_level = 4
//! ```
//!
//! # Variables to Set
//!
//! Names are values rather than table keys so their case survives loading.
//!
//! ```toml
//! [global]
//! overwrite = true
//!
//! [[env]]
//! name = "SGE_ROOT"
//! value = "/opt/sge"
//!
//! [[env]]
//! name = "SGE_CELL"
//! value = "default"
//! overwrite = false # keep a value inherited from the parent
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::EnvVar;
use crate::error::Result;

use loader::ConfigLoader;
use types::GlobalConfig;

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envshim.toml";

/// Prefix of process variables that override configuration.
pub const ENV_PREFIX: &str = "ENVSHIM";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Variables to set, applied in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envshim::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("/etc/envshim/cluster.toml")
    ///     .add_toml_file_optional("envshim.toml")
    ///     .with_env_prefix("ENVSHIM")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Keys are sorted; `[[env]]` entries are listed as `env.<name>` with the
    /// effective overwrite flag.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_env_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.overwrite".into(),
            self.global.overwrite.to_string(),
        );
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_format".into(),
            self.global.log_format.to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_env_options(&self, options: &mut BTreeMap<String, String>) {
        // One line per name: the last entry for a name is shown.
        for var in &self.env {
            let overwrite = var.overwrite_or(self.global.overwrite);
            let value = if overwrite {
                var.value.clone()
            } else {
                format!("{} (if unset)", var.value)
            };
            options.insert(format!("env.{}", var.name), value);
        }
    }
}
