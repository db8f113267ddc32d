// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the commands that mutate the environment.

use clap::Args;
use std::ffi::OsString;

use crate::core::env::Overwrite;

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Variable name, passed to the platform unchanged.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// New value, may be empty.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Overwrite flag: 0 keeps an existing value, anything else replaces it.
    #[arg(value_name = "OVERWRITE", default_value_t = 1, allow_negative_numbers = true)]
    pub overwrite: i32,
}

impl SetArgs {
    #[must_use]
    pub const fn overwrite(&self) -> Overwrite {
        Overwrite::from_flag(self.overwrite)
    }
}

/// Arguments for the `apply` command.
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// Sets variables that are already set, regardless of configuration.
    #[arg(long, conflicts_with = "keep_existing")]
    pub force: bool,

    /// Never replaces variables that are already set, regardless of configuration.
    #[arg(long = "keep-existing")]
    pub keep_existing: bool,

    /// Command to run after the variables are set, e.g. `-- qsub job.sh`.
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<OsString>,
}

impl ApplyArgs {
    /// Overwrite flag forced from the command line, if any.
    #[must_use]
    pub const fn overwrite_override(&self) -> Option<bool> {
        if self.force {
            Some(true)
        } else if self.keep_existing {
            Some(false)
        } else {
            None
        }
    }
}
