// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setting environment variables with `setenv(3)` overwrite semantics.
//!
//! ```text
//! set_environment_variable(name, value, overwrite)
//!        |
//!        v
//!   ProcessEnv::set_var  --Err(io)-->  EnvError::PlatformCall
//!        |
//!        v
//!      Ok(())
//!
//! apply([EnvVar], default_overwrite)
//!   for each: info!("setting system environment NAME=VALUE")
//!             set_environment_variable(...)
//!   --> ApplyReport { Applied | Kept | Failed }
//! ```

use tracing::{debug, info};

use super::ProcessEnv;
use super::system::SystemEnv;
use super::types::EnvVar;
use crate::error::{EnvError, EnvResult};

/// Applies environment mutations on behalf of a caller.
///
/// Failures are handed back to the caller unmodified and never retried.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSetter<E = SystemEnv> {
    env: E,
}

impl EnvironmentSetter<SystemEnv> {
    /// A setter acting on the real process environment.
    #[must_use]
    pub const fn system() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: ProcessEnv> EnvironmentSetter<E> {
    #[must_use]
    pub const fn new(env: E) -> Self {
        Self { env }
    }

    /// Sets `name` to `value` if `overwrite` is true or `name` is unset.
    ///
    /// When `overwrite` is false and the variable exists, the environment is
    /// left untouched and the call still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::PlatformCall`] carrying the platform's cause, e.g.
    /// `EINVAL` for an empty name or one containing `=`.
    pub fn set_environment_variable(
        &mut self,
        name: &str,
        value: &str,
        overwrite: bool,
    ) -> EnvResult<()> {
        self.env
            .set_var(name, value, overwrite)
            .map_err(|source| EnvError::platform(name, source))
    }

    /// Sets `name` to `value`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Same as [`Self::set_environment_variable`].
    pub fn set(&mut self, name: &str, value: &str) -> EnvResult<()> {
        self.set_environment_variable(name, value, true)
    }

    /// Reads a variable from the underlying environment.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<String> {
        self.env.var(name)
    }

    /// Applies configured variables in order.
    ///
    /// A failing entry does not stop the remaining ones; the report records
    /// every outcome.
    pub fn apply<'a, I>(&mut self, vars: I, default_overwrite: bool) -> ApplyReport
    where
        I: IntoIterator<Item = &'a EnvVar>,
    {
        let mut report = ApplyReport::default();

        for var in vars {
            let overwrite = var.overwrite_or(default_overwrite);
            // Only used to tell "kept" from "applied" in the report; the
            // mutation itself stays a single platform call.
            let existing = if overwrite { None } else { self.var(&var.name) };

            info!("setting system environment {}={}", var.name, var.value);
            let outcome = match self.set_environment_variable(&var.name, &var.value, overwrite) {
                Ok(()) => match existing {
                    Some(value) => {
                        debug!(name = %var.name, existing = %value, "kept existing value");
                        ApplyOutcome::Kept { existing: value }
                    }
                    None => ApplyOutcome::Applied,
                },
                Err(e) => ApplyOutcome::Failed(e),
            };
            report.outcomes.push((var.name.clone(), outcome));
        }

        report
    }

    /// Returns the underlying environment.
    #[must_use]
    pub const fn env(&self) -> &E {
        &self.env
    }
}

/// What happened to one configured variable.
#[derive(Debug)]
pub enum ApplyOutcome {
    /// The variable now holds the configured value.
    Applied,
    /// The variable was already set and overwrite was off.
    Kept { existing: String },
    /// The platform refused the call.
    Failed(EnvError),
}

/// Outcomes of [`EnvironmentSetter::apply`], in input order.
#[derive(Debug, Default)]
pub struct ApplyReport {
    outcomes: Vec<(String, ApplyOutcome)>,
}

impl ApplyReport {
    #[must_use]
    pub fn outcomes(&self) -> &[(String, ApplyOutcome)] {
        &self.outcomes
    }

    #[must_use]
    pub fn applied(&self) -> usize {
        self.count(|o| matches!(o, ApplyOutcome::Applied))
    }

    #[must_use]
    pub fn kept(&self) -> usize {
        self.count(|o| matches!(o, ApplyOutcome::Kept { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ApplyOutcome::Failed(_)))
    }

    /// Errors of the failed entries, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &EnvError> {
        self.outcomes.iter().filter_map(|(_, o)| match o {
            ApplyOutcome::Failed(e) => Some(e),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} applied, {} kept, {} failed",
            self.applied(),
            self.kept(),
            self.failed()
        )
    }

    fn count(&self, pred: impl Fn(&ApplyOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}
