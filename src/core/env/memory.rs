// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment with copy-on-write semantics.
//!
//! # Architecture
//!
//! ```text
//! MemoryEnv (copy-on-write)
//! vars: Arc<BTreeMap<String, String>>
//! clone shares the Arc until the first write (Arc::make_mut)
//! ```
//!
//! Follows POSIX rules rather than the host's: names are case-sensitive and
//! validated like `setenv(3)` validates them.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::ProcessEnv;
use super::types::check_posix;

/// A set of environment variables standing in for the process environment.
///
/// # Thread Safety
/// `MemoryEnv` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: Arc<BTreeMap<String, String>>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: Arc::new(vars),
        }
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if self.vars.contains_key(name) {
            Arc::make_mut(&mut self.vars).remove(name);
        }
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.vars).clone()
    }

    /// Returns an iterator over environment variables, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether two environments still share storage (no write since the clone).
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vars, &other.vars)
    }
}

impl FromIterator<(String, String)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl ProcessEnv for MemoryEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }

    fn set_var(&mut self, name: &str, value: &str, overwrite: bool) -> std::io::Result<()> {
        check_posix(name, value)?;

        if !overwrite && self.vars.contains_key(name) {
            return Ok(());
        }
        Arc::make_mut(&mut self.vars).insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}
