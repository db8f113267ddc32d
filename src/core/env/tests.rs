// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::{
    ApplyOutcome, EnvVar, EnvironmentSetter, MemoryEnv, Overwrite, ProcessEnv, SystemEnv,
    current_env,
};
use crate::error::{STATUS_FAILED, STATUS_OK, status_code};
use crate::test_support::lock_test_env;
use std::collections::BTreeMap;

const PAIRS: &[(&str, &str)] = &[
    ("FOO", "bar"),
    ("EMPTY_VALUE", ""),
    ("PATH_LIKE", "/usr/bin:/bin"),
    ("lower_case", "v"),
    ("UNICODE", "ünïcödé"),
    ("WITH_EQUALS_IN_VALUE", "a=b=c"),
];

#[test]
fn test_overwrite_sets_value() {
    let mut setter = EnvironmentSetter::new(MemoryEnv::new());
    for (name, value) in PAIRS {
        setter
            .set_environment_variable(name, value, true)
            .expect("valid pair should be accepted");
        assert_eq!(setter.var(name).as_deref(), Some(*value), "{name}");
    }
}

#[test]
fn test_no_overwrite_keeps_existing() {
    let mut setter = EnvironmentSetter::new(MemoryEnv::new());
    for (name, _) in PAIRS {
        setter.set(name, "original").unwrap();
    }
    for (name, value) in PAIRS {
        let result = setter.set_environment_variable(name, value, false);
        assert_eq!(status_code(&result), STATUS_OK, "{name}");
        assert_eq!(setter.var(name).as_deref(), Some("original"), "{name}");
    }
}

#[test]
fn test_no_overwrite_sets_absent() {
    let mut setter = EnvironmentSetter::new(MemoryEnv::new());
    for (name, value) in PAIRS {
        setter.set_environment_variable(name, value, false).unwrap();
        assert_eq!(setter.var(name).as_deref(), Some(*value), "{name}");
    }
}

#[test]
fn test_repeated_overwrite_is_idempotent() {
    let mut once = EnvironmentSetter::new(MemoryEnv::new());
    let mut twice = EnvironmentSetter::new(MemoryEnv::new());
    for (name, value) in PAIRS {
        once.set_environment_variable(name, value, true).unwrap();
        twice.set_environment_variable(name, value, true).unwrap();
        twice.set_environment_variable(name, value, true).unwrap();
    }
    assert_eq!(once.env(), twice.env());
}

#[test]
fn test_foo_bar_then_baz() {
    let mut setter = EnvironmentSetter::new(MemoryEnv::new());

    let first = setter.set_environment_variable("FOO", "bar", true);
    assert_eq!(status_code(&first), STATUS_OK);
    assert_eq!(setter.var("FOO").as_deref(), Some("bar"));

    let second = setter.set_environment_variable("FOO", "baz", false);
    assert_eq!(status_code(&second), STATUS_OK);
    assert_eq!(setter.var("FOO").as_deref(), Some("bar"));
}

#[test]
fn test_invalid_names_fail_without_change() {
    let mut setter = EnvironmentSetter::new(MemoryEnv::new());
    setter.set("KEEP", "1").unwrap();
    let before = setter.env().clone();

    for name in ["", "A=B", "=", "NUL\0NAME"] {
        let result = setter.set_environment_variable(name, "x", true);
        assert_eq!(status_code(&result), STATUS_FAILED, "{name:?}");
        let err = result.unwrap_err();
        assert_eq!(err.name(), name);
        #[cfg(unix)]
        assert_eq!(err.raw_os_error(), Some(libc::EINVAL));
    }

    assert_eq!(setter.env(), &before);
}

#[test]
fn test_value_with_nul_fails() {
    let mut env = MemoryEnv::new();
    assert!(env.set_var("OK_NAME", "a\0b", true).is_err());
    assert!(env.get("OK_NAME").is_none());
}

#[test]
fn test_memory_env_is_case_sensitive() {
    let mut env = MemoryEnv::new();
    env.set_var("Path", "a", true).unwrap();
    env.set_var("PATH", "b", false).unwrap();

    assert_eq!(env.get("Path"), Some("a"));
    assert_eq!(env.get("PATH"), Some("b"));
    assert_eq!(env.len(), 2);
}

#[test]
fn test_memory_env_copy_on_write() {
    let mut env1 = MemoryEnv::new();
    env1.set_var("KEY1", "value1", true).unwrap();

    let mut env2 = env1.clone();
    assert!(env1.shares_storage_with(&env2));

    // A kept value is not a write.
    env2.set_var("KEY1", "other", false).unwrap();
    assert!(env1.shares_storage_with(&env2));

    env2.set_var("KEY2", "value2", true).unwrap();
    assert!(!env1.shares_storage_with(&env2));
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_memory_env_from_map_and_remove() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let mut env = MemoryEnv::from_map(map.clone());
    assert_eq!(env.to_map(), map);
    assert!(env.contains("KEY1"));

    env.remove("KEY1").remove("MISSING");
    let names: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["KEY2"]);
    assert!(!env.is_empty());
}

#[test]
fn test_setter_through_mut_reference() {
    let mut env = MemoryEnv::new();
    {
        let mut setter = EnvironmentSetter::new(&mut env);
        setter.set("BORROWED", "yes").unwrap();
    }
    assert_eq!(env.get("BORROWED"), Some("yes"));
}

#[test]
fn test_apply_reports_outcomes() {
    let mut setter = EnvironmentSetter::new(MemoryEnv::from_iter([(
        "SGE_CELL".to_string(),
        "default".to_string(),
    )]));

    let vars = vec![
        EnvVar::new("SGE_ROOT", "/opt/sge"),
        EnvVar::new("SGE_CELL", "research").with_overwrite(false),
        EnvVar::new("", "broken"),
        EnvVar::new("SGE_EXECD_PORT", "6445"),
    ];

    let report = setter.apply(&vars, true);

    assert_eq!(report.summary(), "2 applied, 1 kept, 1 failed");
    assert!(!report.is_success());
    assert!(matches!(
        &report.outcomes()[1].1,
        ApplyOutcome::Kept { existing } if existing == "default"
    ));
    assert_eq!(report.failures().count(), 1);
    assert_eq!(setter.var("SGE_ROOT").as_deref(), Some("/opt/sge"));
    assert_eq!(setter.var("SGE_CELL").as_deref(), Some("default"));
    assert_eq!(setter.var("SGE_EXECD_PORT").as_deref(), Some("6445"));
}

#[test]
fn test_apply_default_overwrite_off() {
    let mut setter = EnvironmentSetter::new(MemoryEnv::from_iter([(
        "A".to_string(),
        "old".to_string(),
    )]));

    let vars = [
        EnvVar::new("A", "new"),
        EnvVar::new("B", "new"),
        EnvVar::new("A", "forced").with_overwrite(true),
    ];
    let report = setter.apply(&vars, false);

    assert_eq!(report.summary(), "2 applied, 1 kept, 0 failed");
    assert_eq!(setter.var("A").as_deref(), Some("forced"));
}

#[test]
fn test_overwrite_flag_conversion() {
    assert_eq!(Overwrite::from_flag(0), Overwrite::KeepExisting);
    assert_eq!(Overwrite::from_flag(1), Overwrite::Replace);
    assert_eq!(Overwrite::from_flag(-7), Overwrite::Replace);
    assert!(bool::from(Overwrite::default()));
    assert_eq!(Overwrite::from(false).to_string(), "keep-existing");
}

#[test]
fn test_system_env_round_trip() {
    let _env = lock_test_env();
    let name = "ENVSHIM_UNIT_SYSTEM_ROUND_TRIP";
    let mut setter = EnvironmentSetter::system();

    setter.set_environment_variable(name, "first", true).unwrap();
    setter.set_environment_variable(name, "second", false).unwrap();
    assert_eq!(setter.var(name).as_deref(), Some("first"));

    setter.set(name, "third").unwrap();
    assert_eq!(SystemEnv.var(name).as_deref(), Some("third"));
    assert_eq!(current_env().get(name), Some("third"));
}

#[test]
fn test_system_env_rejects_empty_name() {
    let _env = lock_test_env();
    let mut setter = EnvironmentSetter::system();
    let err = setter.set_environment_variable("", "x", true).unwrap_err();
    assert!(err.cause().kind() == std::io::ErrorKind::InvalidInput);
    assert_eq!(SystemEnv.var(""), None);
}

#[test]
fn test_current_env() {
    let _env = lock_test_env();
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}
