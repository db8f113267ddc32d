// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!          main.rs                     C callers
//!             |                            |
//!      +------+------+                     v
//!      v             v              ffi::envshim_setenv
//!  cli (clap)   cmd (handlers)      ffi::setenv -> 0 | -1
//!      |       set / apply / config        |
//!      +------+------+                     |
//!             v                            |
//!          config                          |
//!   TOML, layered, [[env]]                 |
//!             |                            |
//!             v                            v
//!   +-------------------------------------------+
//!   |  core   env (EnvironmentSetter,           |
//!   |         ProcessEnv, SystemEnv, MemoryEnv) |
//!   |         process (ChildCommand)            |
//!   +-------------------------------------------+
//!   |  foundation   error, logging              |
//!   +-------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod ffi;
pub mod logging;

#[cfg(test)]
mod test_support;

pub use crate::core::env::{EnvironmentSetter, MemoryEnv, ProcessEnv, SystemEnv};
pub use crate::ffi::setenv;
