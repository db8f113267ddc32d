// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment mutation and child processes.
//!
//! ```text
//!              core
//!               |
//!        +------+------+
//!        |             |
//!        v             v
//!       env         process
//!        |             |
//!  ProcessEnv       run_inherited
//!  SystemEnv        (tokio::process)
//!  MemoryEnv
//!  EnvironmentSetter
//! ```

pub mod env;
pub mod process;
