// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Overwrite: Replace | KeepExisting  (from setenv's int flag: 0 => KeepExisting)
//! EnvVar:    { name, value, overwrite: Option<bool> }  (one configured variable)
//! check_posix(name, value): empty / '=' / NUL => EINVAL
//! ```

use serde::{Deserialize, Serialize};

/// What to do when the variable is already set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Leave an existing value untouched
    KeepExisting,
}

impl Overwrite {
    /// Interprets a C-style flag: any non-zero value means replace.
    #[must_use]
    pub const fn from_flag(flag: i32) -> Self {
        if flag == 0 {
            Self::KeepExisting
        } else {
            Self::Replace
        }
    }

    #[must_use]
    pub const fn is_replace(self) -> bool {
        matches!(self, Self::Replace)
    }
}

impl From<bool> for Overwrite {
    fn from(overwrite: bool) -> Self {
        if overwrite {
            Self::Replace
        } else {
            Self::KeepExisting
        }
    }
}

impl From<Overwrite> for bool {
    fn from(overwrite: Overwrite) -> Self {
        overwrite.is_replace()
    }
}

impl std::fmt::Display for Overwrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
            Self::KeepExisting => write!(f, "keep-existing"),
        }
    }
}

/// A single variable to set, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvVar {
    /// Variable name, passed to the platform as-is.
    pub name: String,
    /// Variable value, may be empty.
    #[serde(default)]
    pub value: String,
    /// Per-variable overwrite flag; falls back to the global default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            overwrite: None,
        }
    }

    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// The effective overwrite flag given the configured default.
    #[must_use]
    pub fn overwrite_or(&self, default: bool) -> bool {
        self.overwrite.unwrap_or(default)
    }
}

/// The error the platform reports for a malformed argument.
#[must_use]
pub fn invalid_argument() -> std::io::Error {
    #[cfg(unix)]
    {
        std::io::Error::from_raw_os_error(libc::EINVAL)
    }
    #[cfg(not(unix))]
    {
        std::io::Error::from(std::io::ErrorKind::InvalidInput)
    }
}

/// Applies the POSIX `setenv` argument rules.
///
/// # Errors
///
/// Returns [`invalid_argument`] if `name` is empty or contains `=` or NUL, or
/// if `value` contains NUL.
pub fn check_posix(name: &str, value: &str) -> std::io::Result<()> {
    if name.is_empty() || name.contains(['=', '\0']) || value.contains('\0') {
        return Err(invalid_argument());
    }
    Ok(())
}
