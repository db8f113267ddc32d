// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child processes that inherit the mutated environment.
//!
//! ```text
//! ChildCommand::new("make").args([..])
//!   .run()
//!     --> tokio::process::Command (stdio inherited, env inherited at spawn)
//!     --> exit code | ProcessError::{SpawnFailed, Terminated}
//! ```
//!
//! A child receives a copy of the environment as it is at spawn time; later
//! mutations in this process are not seen by it. Spawning holds the same
//! lock as every other environment access made through this crate.

use std::ffi::OsString;
use std::fmt::Write as _;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::core::env::lock_env;
use crate::error::ProcessError;

/// A command run with the current process environment.
#[derive(Debug, Clone)]
pub struct ChildCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ChildCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.program.to_string_lossy().into_owned();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the command, waits for it and returns its exit code.
    ///
    /// A non-zero exit code is returned as-is, not treated as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::SpawnFailed`] if the process cannot be started
    /// and [`ProcessError::Terminated`] if it was killed by a signal.
    pub async fn run(&self) -> Result<i32, ProcessError> {
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec");

        let spawned = {
            // The child copies `environ` during spawn.
            let _env = lock_env();
            Command::new(&self.program)
                .args(&self.args)
                .kill_on_drop(true)
                .spawn()
        };
        let mut child = spawned.map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;

        trace!(pid = ?child.id(), "spawned");

        let status = child
            .wait()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let code = status
            .code()
            .ok_or(ProcessError::Terminated { command: cmd_line })?;
        trace!(exit_code = code, "completed");
        Ok(code)
    }
}
