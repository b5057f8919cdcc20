//! Tests for layered configuration loading

use std::path::PathBuf;

use regimed::config::{Config, ConfigError, ENV_REGULATIONS_FILE, ENV_RULES_FILE, ENV_THRESHOLD};
use serial_test::serial;

use crate::common::Workspace;

/// Restores the working directory and clears `REGIMED_*` on drop
struct EnvGuard {
    cwd: PathBuf,
}

impl EnvGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { cwd }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in [ENV_RULES_FILE, ENV_REGULATIONS_FILE, ENV_THRESHOLD] {
            // SAFETY: tests touching the environment run serially
            unsafe { std::env::remove_var(name) };
        }
        let _ = std::env::set_current_dir(&self.cwd);
    }
}

#[test]
#[serial]
fn test_project_file_is_picked_up() {
    let workspace = Workspace::new();
    workspace.add_document("regimed.toml", b"rules_file = \"policies/rules.txt\"\nthreshold = 0.7\n");
    let _guard = EnvGuard::enter(workspace.path());

    let config = Config::load(None).unwrap();
    assert_eq!(config.rules_file, PathBuf::from("policies/rules.txt"));
    assert!((config.threshold - 0.7).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let workspace = Workspace::new();
    let path = workspace.add_document("custom.toml", b"threshold = 0.7\n");
    let _guard = EnvGuard::enter(workspace.path());

    // SAFETY: tests touching the environment run serially
    unsafe {
        std::env::set_var(ENV_THRESHOLD, "0.25");
        std::env::set_var(ENV_REGULATIONS_FILE, "/srv/regulations.json");
    }

    let config = Config::load(Some(path.as_path())).unwrap();
    assert!((config.threshold - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.regulations_file, PathBuf::from("/srv/regulations.json"));
}

#[test]
#[serial]
fn test_invalid_env_threshold() {
    let workspace = Workspace::new();
    let _guard = EnvGuard::enter(workspace.path());

    // SAFETY: tests touching the environment run serially
    unsafe { std::env::set_var(ENV_THRESHOLD, "half") };

    let err = Config::load(None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    assert!(err.to_string().contains("REGIMED_THRESHOLD"));
}

#[test]
#[serial]
fn test_broken_project_file() {
    let workspace = Workspace::new();
    workspace.add_document("regimed.toml", b"threshold = [");
    let _guard = EnvGuard::enter(workspace.path());

    assert!(matches!(Config::load(None), Err(ConfigError::Parse { .. })));
}
