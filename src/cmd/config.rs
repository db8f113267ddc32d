// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `options` and `configs` commands.

use crate::config::Config;
use crate::config::loader::ConfigLoader;

/// Prints every effective option, `[[env]]` entries included.
pub fn run_options_command(config: &Config) {
    config
        .format_options()
        .iter()
        .for_each(|line| println!("{line}"));
}

/// Prints the configuration sources in load order.
pub fn run_configs_command(loader: &ConfigLoader) {
    let lines = loader.format_loaded_files();
    if lines.is_empty() {
        println!("No configuration files loaded");
    }
    for line in lines {
        println!("{line}");
    }
}
