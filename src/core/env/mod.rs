// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentSetter<E: ProcessEnv>
//!        |
//!        v
//!   ProcessEnv::set_var(name, value, overwrite)
//!    |                         |
//!    v                         v
//! SystemEnv                 MemoryEnv
//! libc::setenv (unix)       copy-on-write BTreeMap
//! ENV_LOCK serialised       same POSIX validation
//! ```
//!
//! - **Process-wide**: `SystemEnv` mutates the environment shared by every
//!   thread and inherited by children spawned afterwards.
//! - **Injectable**: code that needs the environment takes a `ProcessEnv`, so
//!   tests can hand it a `MemoryEnv` instead.
//!
//! # Thread Safety
//!
//! `setenv(3)` is not safe against a concurrent `getenv(3)` on another thread.
//! Every read and write made through [`SystemEnv`] holds one process-wide lock,
//! and so does spawning a [`ChildCommand`](crate::core::process::ChildCommand),
//! which copies `environ`.
//! Reads that bypass this crate (foreign code calling `getenv` directly) are
//! not covered by that lock.

pub mod memory;
pub mod setter;
pub mod system;
pub mod types;

#[cfg(test)]
mod tests;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use memory::MemoryEnv;
pub use setter::{ApplyOutcome, ApplyReport, EnvironmentSetter};
pub use system::SystemEnv;
pub use types::{EnvVar, Overwrite};

/// An abstraction over "the current process environment".
pub trait ProcessEnv {
    /// Reads a variable, `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value`, leaving an existing value untouched unless
    /// `overwrite` is true.
    ///
    /// # Errors
    ///
    /// Returns the platform's error cause: `EINVAL` for an empty name or one
    /// containing `=` or NUL, `ENOMEM` when the environment cannot grow.
    fn set_var(&mut self, name: &str, value: &str, overwrite: bool) -> std::io::Result<()>;
}

impl<E: ProcessEnv + ?Sized> ProcessEnv for &mut E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn set_var(&mut self, name: &str, value: &str, overwrite: bool) -> std::io::Result<()> {
        (**self).set_var(name, value, overwrite)
    }
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Acquires the process-wide environment lock.
///
/// The lock guards no data, so a poisoned lock is simply taken over.
pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> MemoryEnv {
    SystemEnv.snapshot()
}
