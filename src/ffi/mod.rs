// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integer-status boundary, for callers expecting the `setenv(3)` contract.
//!
//! ```text
//! envshim_setenv(const char*, const char*, int) -> int   (C ABI, cdylib)
//!   null          --> -1, errno = EINVAL
//!   unix          --> setenv_c(&CStr, &CStr), bytes unchanged
//!   other         --> UTF-8 check --> SystemEnv::set_var
//!
//! setenv(&str, &str, i32) -> i32                          (Rust callers)
//!              |
//!              v
//! EnvironmentSetter::<SystemEnv>::set_environment_variable
//!              |
//!              v
//!          0 | -1
//! ```

use std::ffi::{CStr, c_char, c_int};

use libc::EINVAL;

#[cfg(unix)]
use crate::core::env::system::setenv_c;
#[cfg(not(unix))]
use crate::core::env::types::invalid_argument;
#[cfg(not(unix))]
use crate::core::env::{ProcessEnv, SystemEnv};
use crate::core::env::{EnvironmentSetter, Overwrite};
use crate::error::{STATUS_FAILED, STATUS_OK, status_code};

/// Sets a process environment variable, returning 0 on success and -1 on
/// failure.
///
/// A non-zero `overwrite` replaces an existing value; zero leaves it untouched
/// and still reports success.
#[must_use]
pub fn setenv(name: &str, value: &str, overwrite: i32) -> i32 {
    let overwrite = Overwrite::from_flag(overwrite).is_replace();
    status_code(&EnvironmentSetter::system().set_environment_variable(name, value, overwrite))
}

/// C ABI export of [`setenv`].
///
/// On unix the bytes are handed to `setenv(3)` unchanged, so names and values
/// need not be UTF-8. Elsewhere they must be UTF-8. A null pointer returns -1
/// without touching the environment. Every failure leaves `errno` set.
///
/// # Safety
///
/// `name` and `value` must each be null or point to a NUL-terminated string
/// that stays valid for the duration of the call. Neither pointer is retained.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn envshim_setenv(
    name: *const c_char,
    value: *const c_char,
    overwrite: c_int,
) -> c_int {
    if name.is_null() || value.is_null() {
        set_errno(EINVAL);
        return STATUS_FAILED;
    }
    // SAFETY: both pointers are non-null and NUL-terminated per the contract.
    let (name, value) = unsafe { (CStr::from_ptr(name), CStr::from_ptr(value)) };
    let overwrite = Overwrite::from_flag(overwrite).is_replace();

    match setenv_cstr(name, value, overwrite) {
        Ok(()) => STATUS_OK,
        Err(e) => {
            // Restore the platform's cause after any call made since.
            set_errno(e.raw_os_error().unwrap_or(EINVAL));
            STATUS_FAILED
        }
    }
}

#[cfg(unix)]
fn setenv_cstr(name: &CStr, value: &CStr, overwrite: bool) -> std::io::Result<()> {
    setenv_c(name, value, overwrite)
}

#[cfg(not(unix))]
fn setenv_cstr(name: &CStr, value: &CStr, overwrite: bool) -> std::io::Result<()> {
    match (name.to_str(), value.to_str()) {
        (Ok(name), Ok(value)) => SystemEnv.set_var(name, value, overwrite),
        _ => Err(invalid_argument()),
    }
}

/// Stores `code` in the calling thread's `errno`.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn set_errno(code: c_int) {
    // SAFETY: __errno_location returns the calling thread's errno slot.
    unsafe { *libc::__errno_location() = code };
}

/// Stores `code` in the calling thread's `errno`.
#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
fn set_errno(code: c_int) {
    // SAFETY: __error returns the calling thread's errno slot.
    unsafe { *libc::__error() = code };
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
)))]
const fn set_errno(_code: c_int) {}
