//! Environment override tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test that `from_env()` captures overrides at build time.
//! - Test precedence: environment > file > default for flat lookups.
//! - Test that sectioned lookups ignore the environment.

use super::{env_lock, write_config};
use crate::loader::builder::ConfigLoader;
use crate::loader::env::EnvSnapshot;
use crate::resolver::{Source, create_config};
use serial_test::serial;
use tempfile::TempDir;

const FIXTURE: &[u8] = b"PAGE_SIZE=10\nTITLE = From file\n[Paging]\nPAGE_SIZE=50\n";

#[test]
#[serial]
fn test_env_overrides_file_value() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), FIXTURE);

    let config = temp_env::with_vars([("PAGE_SIZE", Some("20"))], || {
        ConfigLoader::new()
            .with_config_path(&path)
            .from_env()
            .try_build()
            .unwrap()
    });

    assert_eq!(config.get("page_size", "default"), "20");
    assert_eq!(config.resolve("PAGE_SIZE").unwrap().source, Source::Environment);
}

#[test]
#[serial]
fn test_file_value_used_when_env_unset() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), FIXTURE);

    let (config, error) =
        temp_env::with_vars_unset(["PAGE_SIZE", "TITLE"], || create_config(&path));

    assert!(error.is_none());
    assert_eq!(config.get("PAGE_SIZE", "default"), "10");
    assert_eq!(config.get("title", "default"), "From file");
    assert_eq!(config.resolve("title").unwrap().source, Source::File);
}

#[test]
#[serial]
fn test_env_used_when_key_not_in_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), FIXTURE);

    let (config, _) = temp_env::with_vars([("NOT_IN_FILE", Some("20"))], || create_config(&path));

    assert_eq!(config.get("not_in_file", "default"), "20");
}

#[test]
#[serial]
fn test_lowercase_env_name_matches() {
    let _lock = env_lock().lock().unwrap();

    let (config, _) = temp_env::with_vars([("simples_max_length", Some("20"))], || {
        ConfigLoader::new().from_env().build()
    });

    assert_eq!(config.get("SIMPLES_MAX_LENGTH", "default"), "20");
}

#[test]
#[serial]
fn test_env_missing_everywhere_returns_default() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), FIXTURE);

    let (config, _) = temp_env::with_var_unset("NOT-FOUND", || create_config(&path));

    assert_eq!(config.get("NOT-FOUND", "default"), "default");
    assert!(config.resolve("NOT-FOUND").is_none());
}

#[test]
#[serial]
fn test_env_changes_after_build_are_not_seen() {
    let _lock = env_lock().lock().unwrap();

    let (config, _) = temp_env::with_var_unset("SIMPLES_LATE_VAR", || {
        ConfigLoader::new().from_env().build()
    });

    temp_env::with_var("SIMPLES_LATE_VAR", Some("late"), || {
        assert_eq!(config.get("SIMPLES_LATE_VAR", "default"), "default");
    });
}

#[test]
#[serial]
fn test_env_does_not_override_sectioned_lookups() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), FIXTURE);

    let (config, _) = temp_env::with_vars([("PAGE_SIZE", Some("20"))], || create_config(&path));

    assert_eq!(config.get_number("DEFAULT", "PAGE_SIZE", 0), 10);
    assert_eq!(config.get_number("PAGING", "PAGE_SIZE", 0), 50);
}

#[test]
fn test_explicit_snapshot_replaces_process_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), FIXTURE);

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(EnvSnapshot::from_vars([("title", "From snapshot")]))
        .try_build()
        .unwrap();

    assert_eq!(config.get("TITLE", "default"), "From snapshot");
    assert_eq!(config.get("PAGE_SIZE", "default"), "10");
}
