// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The real process environment.
//!
//! ```text
//! SystemEnv::set_var
//!   lock_env()
//!   unix:  CString(name), CString(value) -> setenv_c -> libc::setenv -> errno
//!   other: check_posix -> var_os check -> std::env::set_var
//! ```

use std::collections::BTreeMap;
#[cfg(unix)]
use std::ffi::{CStr, CString};

use tracing::trace;

use super::memory::MemoryEnv;
#[cfg(not(unix))]
use super::types::check_posix;
#[cfg(unix)]
use super::types::invalid_argument;
use super::{ProcessEnv, lock_env};

/// Handle to the environment of the running process.
///
/// All handles share the same underlying environment; the type carries no
/// state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Copies every variable currently set into a [`MemoryEnv`].
    ///
    /// Names and values that are not valid UTF-8 are converted lossily.
    #[must_use]
    pub fn snapshot(&self) -> MemoryEnv {
        let _guard = lock_env();
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();
        MemoryEnv::from_map(vars)
    }
}

impl ProcessEnv for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        let _guard = lock_env();
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn set_var(&mut self, name: &str, value: &str, overwrite: bool) -> std::io::Result<()> {
        platform_setenv(name, value, overwrite)
    }
}

#[cfg(unix)]
fn platform_setenv(name: &str, value: &str, overwrite: bool) -> std::io::Result<()> {
    // An interior NUL cannot cross the boundary; report it the way setenv
    // reports any other malformed name.
    let c_name = CString::new(name).map_err(|_| invalid_argument())?;
    let c_value = CString::new(value).map_err(|_| invalid_argument())?;
    setenv_c(&c_name, &c_value, overwrite)
}

/// Calls `setenv(3)` with the bytes as given, under the environment lock.
///
/// # Errors
///
/// Returns the `errno` left by `setenv(3)`.
#[cfg(unix)]
pub(crate) fn setenv_c(name: &CStr, value: &CStr, overwrite: bool) -> std::io::Result<()> {
    trace!(name = %name.to_string_lossy(), overwrite, "setenv");

    let _guard = lock_env();
    // SAFETY: both pointers are NUL-terminated and outlive the call; setenv
    // copies them. Every access made through this crate holds ENV_LOCK.
    let rc = unsafe { libc::setenv(name.as_ptr(), value.as_ptr(), libc::c_int::from(overwrite)) };
    if rc == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn platform_setenv(name: &str, value: &str, overwrite: bool) -> std::io::Result<()> {
    trace!(name, overwrite, "setenv");
    check_posix(name, value)?;

    let _guard = lock_env();
    if !overwrite && std::env::var_os(name).is_some() {
        return Ok(());
    }
    // SAFETY: ENV_LOCK is held, so no other access made through this crate
    // runs concurrently.
    unsafe {
        std::env::set_var(name, value);
    }
    Ok(())
}
