// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::apply_and_report;
use crate::cli::env::ApplyArgs;
use crate::config::Config;
use crate::core::env::{EnvironmentSetter, MemoryEnv};

const CONFIG: &str = r#"
[[env]]
name = "SGE_ROOT"
value = "/opt/sge"

[[env]]
name = "SGE_CELL"
value = "research"
overwrite = false
"#;

fn args(force: bool, keep_existing: bool) -> ApplyArgs {
    ApplyArgs {
        force,
        keep_existing,
        command: Vec::new(),
    }
}

fn inherited() -> MemoryEnv {
    MemoryEnv::from_iter([
        ("SGE_ROOT".to_string(), "/old".to_string()),
        ("SGE_CELL".to_string(), "default".to_string()),
    ])
}

#[test]
fn test_apply_uses_config_flags() {
    let config = Config::parse(CONFIG).unwrap();
    let mut setter = EnvironmentSetter::new(inherited());
    let mut out = Vec::new();

    let report = apply_and_report(&mut setter, &args(false, false), &config, &mut out).unwrap();

    assert_eq!(report.summary(), "1 applied, 1 kept, 0 failed");
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    SGE_ROOT=/opt/sge
    SGE_CELL=default (kept)
    ");
}

#[test]
fn test_apply_force_and_keep_existing() {
    let config = Config::parse(CONFIG).unwrap();

    let mut forced = EnvironmentSetter::new(inherited());
    apply_and_report(&mut forced, &args(true, false), &config, &mut std::io::sink()).unwrap();
    assert_eq!(forced.var("SGE_CELL").as_deref(), Some("research"));

    let mut kept = EnvironmentSetter::new(inherited());
    apply_and_report(&mut kept, &args(false, true), &config, &mut std::io::sink()).unwrap();
    assert_eq!(kept.var("SGE_ROOT").as_deref(), Some("/old"));
}

#[test]
fn test_apply_failure_is_an_error() {
    let config = Config::parse("[[env]]\nname = \"\"\nvalue = \"x\"\n[[env]]\nname = \"OK\"\nvalue = \"1\"").unwrap();
    let mut setter = EnvironmentSetter::new(MemoryEnv::new());

    let err = apply_and_report(&mut setter, &args(false, false), &config, &mut std::io::sink())
        .unwrap_err();

    assert_eq!(err.to_string(), "fatal error: 1 of 2 variables could not be set");
    assert_eq!(setter.var("OK").as_deref(), Some("1"));
}
