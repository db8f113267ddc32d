// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `apply` command.
//!
//! ```text
//! Config [[env]] --(--force / --keep-existing)--> EnvironmentSetter::apply
//!        |
//!        v
//!   ApplyReport --any failed--> error, command not run
//!        |
//!        v
//!   ChildCommand::run (inherits environment) --> exit code
//! ```

use std::io::Write;

use tracing::{error, info};

use crate::cli::env::ApplyArgs;
use crate::config::Config;
use crate::core::env::{ApplyOutcome, ApplyReport, EnvVar, EnvironmentSetter, ProcessEnv};
use crate::core::process::ChildCommand;
use crate::error::{Result, bail_out};

/// Run the apply command against the process environment.
///
/// Returns the exit code of the spawned command, or 0 when no command was
/// given.
///
/// # Errors
///
/// Returns an error if any variable could not be set (the command is then
/// not run) or if the command cannot be spawned.
pub async fn run_apply_command(args: &ApplyArgs, config: &Config) -> Result<i32> {
    let mut setter = EnvironmentSetter::system();
    {
        let mut stdout = std::io::stdout().lock();
        apply_and_report(&mut setter, args, config, &mut stdout)?;
    }

    let Some((program, rest)) = args.command.split_first() else {
        return Ok(0);
    };

    let code = ChildCommand::new(program).args(rest).run().await?;
    info!(exit_code = code, "command finished");
    Ok(code)
}

/// Applies the configured variables through `setter` and writes one line per
/// variable to `out`.
///
/// # Errors
///
/// Returns an error naming the number of failed variables, or if `out`
/// cannot be written.
pub fn apply_and_report<E: ProcessEnv, W: Write>(
    setter: &mut EnvironmentSetter<E>,
    args: &ApplyArgs,
    config: &Config,
    out: &mut W,
) -> Result<ApplyReport> {
    let vars = effective_vars(config, args.overwrite_override());
    let report = setter.apply(&vars, config.global.overwrite);

    for ((name, outcome), var) in report.outcomes().iter().zip(&vars) {
        match outcome {
            ApplyOutcome::Applied => writeln!(out, "{name}={}", var.value)?,
            ApplyOutcome::Kept { existing } => writeln!(out, "{name}={existing} (kept)")?,
            ApplyOutcome::Failed(e) => error!(cause = %e.cause(), "{e}"),
        }
    }
    info!("{}", report.summary());

    if !report.is_success() {
        return Err(bail_out(format!(
            "{} of {} variables could not be set",
            report.failed(),
            vars.len()
        ))
        .into());
    }
    Ok(report)
}

fn effective_vars(config: &Config, overwrite: Option<bool>) -> Vec<EnvVar> {
    match overwrite {
        Some(overwrite) => config
            .env
            .iter()
            .cloned()
            .map(|var| var.with_overwrite(overwrite))
            .collect(),
        None => config.env.clone(),
    }
}

#[cfg(test)]
mod tests;
