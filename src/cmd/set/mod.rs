// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `set` command.
//!
//! ```text
//! Initial value: NAME=<before>
//! setenv(NAME, VALUE, OVERWRITE)
//! Updated value: NAME=<after>
//! ```

use std::io::Write;

use crate::cli::env::SetArgs;
use crate::core::env::{EnvironmentSetter, ProcessEnv};
use crate::error::{Result, ShimError};

/// Shown in place of the value of an unset variable.
pub const UNSET: &str = "<unset>";

/// Run the set command against the process environment.
///
/// # Errors
///
/// Returns an error if the platform rejects the call or stdout cannot be
/// written.
pub fn run_set_command(args: &SetArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    set_and_report(&mut EnvironmentSetter::system(), args, &mut stdout)
}

/// Sets the variable through `setter`, writing its value before and after.
///
/// The updated value is written even when the call fails.
///
/// # Errors
///
/// Returns an error if the platform rejects the call or `out` cannot be
/// written.
pub fn set_and_report<E: ProcessEnv, W: Write>(
    setter: &mut EnvironmentSetter<E>,
    args: &SetArgs,
    out: &mut W,
) -> Result<()> {
    let before = setter.var(&args.name);
    writeln!(
        out,
        "Initial value: {}={}",
        args.name,
        before.as_deref().unwrap_or(UNSET)
    )?;

    let result = setter.set_environment_variable(
        &args.name,
        &args.value,
        args.overwrite().is_replace(),
    );

    let after = setter.var(&args.name);
    writeln!(
        out,
        "Updated value: {}={}",
        args.name,
        after.as_deref().unwrap_or(UNSET)
    )?;

    result.map_err(ShimError::from)?;
    Ok(())
}
