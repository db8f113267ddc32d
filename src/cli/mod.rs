// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envshim using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envshim [global options] <command>
//! set <NAME> <VALUE> [OVERWRITE]
//! apply [-- COMMAND ARGS...]
//! options
//! configs
//! version
//! ```

pub mod env;
pub mod global;


use crate::cli::env::{ApplyArgs, SetArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Process environment setter.
#[derive(Debug, Parser)]
#[command(
    name = "envshim",
    author,
    version,
    about = "Sets process environment variables with setenv(3) semantics",
    long_about = "envshim Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Sets environment variables in its own process environment, the\n\
                  way setenv(3) does, and optionally runs a command that inherits\n\
                  them. `envshim set NAME VALUE 0` leaves an existing value alone.",
    after_help = "CONFIG FILES:\n\n\
                  `envshim apply` reads [[env]] entries from the files given with\n\
                  --config, in order, then from `envshim.toml` in the current\n\
                  directory if it exists. Use --no-default-config to skip the\n\
                  latter. ENVSHIM_GLOBAL__<KEY> variables override [global] keys."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Sets one variable and shows its value before and after.
    Set(SetArgs),

    /// Sets the configured variables, then optionally runs a command.
    Apply(ApplyArgs),

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
