// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(path)            required, error if missing
//!   .add_toml_file_optional(path)   skipped if missing
//!   .add_toml_str(text)             inline TOML
//!   .with_env_prefix("ENVSHIM")     ENVSHIM_GLOBAL__* only, e.g.
//!                                   ENVSHIM_GLOBAL__OVERWRITE=false
//!   .set("global.overwrite", v)     explicit override
//!        |
//!        v
//!   build() --> Config   (later sources win, arrays are replaced)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat, Map};

use super::Config;
use crate::core::env::current_env;
use crate::error::Result;

/// Where a configuration layer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file given explicitly, which must exist.
    File(PathBuf),
    /// A file that was picked up because it exists.
    OptionalFile(PathBuf),
    /// TOML text passed in directly.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => write!(f, "[string] <string>"),
        }
    }
}

/// Collects configuration layers and merges them into a [`Config`].
pub struct ConfigLoader {
    layers: ConfigBuilder<DefaultState>,
    sources: Vec<ConfigSource>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: config::Config::builder(),
            sources: Vec::new(),
            env_prefix: None,
        }
    }

    /// Adds a TOML file that must exist when [`Self::build`] runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        self.push_file(path, true, ConfigSource::File(path.to_path_buf()))
    }

    /// Adds a TOML file that is ignored if it does not exist.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let source = ConfigSource::OptionalFile(path.to_path_buf());
        let mut loader = self.push_file(path, false, source);
        if !path.exists() {
            loader.sources.pop();
        }
        loader
    }

    /// Adds inline TOML text.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.layers = self
            .layers
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX_GLOBAL__KEY` process variables as the last layer.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_owned());
        self
    }

    /// Overrides a single key, e.g. `global.overwrite`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid configuration path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.layers = self.layers.set_override(key, value)?;
        Ok(self)
    }

    /// Merges every layer and deserializes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a layer is not valid
    /// TOML, or the merged values do not fit [`Config`] (an `[[env]]` entry
    /// without `name`, an unknown key, a log level above 6).
    pub fn build(self) -> Result<Config> {
        let mut layers = self.layers;
        if let Some(prefix) = &self.env_prefix {
            layers = layers.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(global_overrides(prefix))),
            );
        }
        Ok(layers.build()?.try_deserialize()?)
    }

    /// The layers added so far, in load order. Missing optional files are
    /// not listed.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// One numbered line per source, for the `configs` command.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .zip(1..)
            .map(|(source, n)| format!("{n}. {source}"))
            .collect()
    }

    fn push_file(mut self, path: &Path, required: bool, source: ConfigSource) -> Self {
        self.layers = self
            .layers
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self.sources.push(source);
        self
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// The `PREFIX_GLOBAL__*` process variables, matched case-insensitively.
///
/// Other `PREFIX_*` names are ordinary variables, often set by this tool
/// itself, and never become configuration keys.
fn global_overrides(prefix: &str) -> Map<String, String> {
    let wanted = format!("{prefix}_GLOBAL__").to_ascii_uppercase();
    current_env()
        .iter()
        .filter(|(name, _)| {
            name.get(..wanted.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(&wanted))
        })
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}
