// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Helpers shared by unit tests.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serialises tests that mutate or read the real process environment, or
/// spawn children that inherit it.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Takes [`ENV_MUTEX`], recovering it if a previous holder panicked.
pub(crate) fn lock_test_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `future` on a fresh current-thread runtime.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build test runtime")
        .block_on(future)
}
