// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ShimError (~24 bytes)
//!                    |
//!   +-------+-------+-------+------+
//!   |       |       |       |      |
//!   v       v       v       v      v
//! Bail     Env   Config  Process  Io
//! Box<str> Box     Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Env     PlatformCall (errno from setenv)
//!   Config  InvalidValue
//!   Process SpawnFailed, Terminated
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShimError`].
pub type ShimResult<T> = std::result::Result<T, ShimError>;

/// Result type of a single environment mutation.
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Status code reported for a successful platform call.
pub const STATUS_OK: i32 = 0;

/// Status code reported for a failed platform call.
pub const STATUS_FAILED: i32 = -1;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack. Wrapping
/// variants name only their layer; the wrapped error is the `source`, so
/// `{:#}` prints each cause once.
#[derive(Debug, Error)]
pub enum ShimError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Environment mutation failed.
    #[error("environment error")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error")]
    Config(#[from] Box<ConfigError>),

    /// Child process error.
    #[error("process error")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`ShimError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> ShimError {
    ShimError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ShimError {
                fn from(err: $error) -> Self {
                    ShimError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Environment Errors ---

/// Failure of the underlying environment primitive.
///
/// There is exactly one kind: the platform refused the call. The cause is the
/// platform's own error state (`EINVAL` for a malformed name, `ENOMEM` when the
/// environment storage cannot grow).
#[derive(Debug, Error)]
pub enum EnvError {
    /// The platform call returned a failure status.
    #[error("setenv({name:?}) failed")]
    PlatformCall {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl EnvError {
    /// Wraps a platform error for the variable `name`.
    pub fn platform(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::PlatformCall {
            name: name.into(),
            source,
        }
    }

    /// The variable name the failed call was made for.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::PlatformCall { name, .. } => name,
        }
    }

    /// The raw OS error code, when the platform reported one.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::PlatformCall { source, .. } => source.raw_os_error(),
        }
    }

    /// The platform's error cause.
    #[must_use]
    pub const fn cause(&self) -> &std::io::Error {
        match self {
            Self::PlatformCall { source, .. } => source,
        }
    }
}

/// Maps the result of an environment mutation to the `setenv(3)` status code.
#[must_use]
pub const fn status_code<T>(result: &EnvResult<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(_) => STATUS_FAILED,
    }
}

// --- Config Errors ---

/// Configuration-related errors.
///
/// Parse and I/O failures surface as `config::ConfigError` through
/// [`Result`]; this type covers values that parse but are out of range.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value outside its allowed range.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Child process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}'")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process was terminated without an exit code (signal).
    #[error("process '{command}' was terminated")]
    Terminated { command: String },
}

#[cfg(test)]
mod tests;
