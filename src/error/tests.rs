// envshim: process environment setter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    ConfigError, EnvError, EnvResult, ProcessError, STATUS_FAILED, STATUS_OK, ShimError,
    ShimResult, status_code,
};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "file_log_level".to_string(),
        message: "log level must be 0-6, got 9".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'file_log_level' in section '[global]': log level must be 0-6, got 9");
}

#[test]
fn test_env_error_accessors() {
    let err = EnvError::platform("FOO=BAR", std::io::Error::from_raw_os_error(libc::EINVAL));

    assert_eq!(err.name(), "FOO=BAR");
    assert_eq!(err.raw_os_error(), Some(libc::EINVAL));
    assert_eq!(err.to_string(), "setenv(\"FOO=BAR\") failed");
}

#[test]
fn test_status_code() {
    let ok: EnvResult<()> = Ok(());
    let failed: EnvResult<()> = Err(EnvError::platform(
        "",
        std::io::Error::from_raw_os_error(libc::EINVAL),
    ));

    assert_eq!(status_code(&ok), STATUS_OK);
    assert_eq!(status_code(&failed), STATUS_FAILED);
    assert_eq!(STATUS_FAILED, -1);
}

#[test]
fn test_boxed_conversions() {
    let err: ShimError = EnvError::platform("X", std::io::Error::other("boom")).into();
    assert!(matches!(err, ShimError::Env(_)));

    let err: ShimError = ProcessError::Terminated {
        command: "sleep 60".to_string(),
    }
    .into();
    insta::assert_snapshot!(format!("{:#}", anyhow::Error::from(err)), @"process error: process 'sleep 60' was terminated");

    let err: ShimError = std::io::Error::other("disk full").into();
    assert!(matches!(err, ShimError::Io(_)));
}

#[test]
fn test_shim_error_size() {
    // Bailed holds a Box<str>: 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<ShimError>();
    assert!(size <= 24, "ShimError is {size} bytes, expected <= 24");
}

#[test]
fn test_shim_result_size() {
    let size = std::mem::size_of::<ShimResult<()>>();
    assert!(size <= 24, "ShimResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_error_chain_prints_each_cause_once() {
    let err: ShimError = EnvError::platform("", std::io::Error::other("boom")).into();
    let chain = format!("{:#}", anyhow::Error::from(err));

    insta::assert_snapshot!(chain, @r#"environment error: setenv("") failed: boom"#);
    assert_eq!(chain.matches("boom").count(), 1);

    let spawn: ShimError = ProcessError::SpawnFailed {
        command: "qsub job.sh".to_string(),
        source: std::io::Error::other("not found"),
    }
    .into();
    insta::assert_snapshot!(
        format!("{:#}", anyhow::Error::from(spawn)),
        @"process error: failed to spawn process 'qsub job.sh': not found"
    );
}
