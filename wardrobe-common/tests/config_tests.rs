//! Integration tests for config file resolution
//!
//! Tests the priority order (argument, environment, platform default) and
//! graceful fallback to compiled defaults.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate the config environment variable are marked with
//! #[serial] so they run sequentially.

use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;
use wardrobe_common::config::{ConfigResolver, OutputFormat, TomlConfig};
use wardrobe_common::Error;

const TEST_ENV_VAR: &str = "WARDROBE_CONFIG_TEST";

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_cli_argument_takes_priority_over_env() {
    let temp_dir = TempDir::new().unwrap();
    let cli_path = write_config(&temp_dir, "cli.toml", "[output]\nformat = \"text\"\n");
    let env_path = write_config(&temp_dir, "env.toml", "[output]\nparallel = true\n");
    env::set_var(TEST_ENV_VAR, &env_path);

    let resolver = ConfigResolver::with_env_var(TEST_ENV_VAR);
    assert_eq!(resolver.resolve_path(Some(&cli_path)), Some(cli_path.clone()));

    let (config, source) = resolver.load(Some(&cli_path)).unwrap();
    assert_eq!(source, Some(cli_path.clone()));
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(!config.output.parallel);

    env::remove_var(TEST_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_without_cli_argument() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = write_config(
        &temp_dir,
        "env.toml",
        "[logging]\nlevel = \"debug\"\n\n[output]\nparallel = true\n",
    );
    env::set_var(TEST_ENV_VAR, &env_path);

    let resolver = ConfigResolver::with_env_var(TEST_ENV_VAR);
    let (config, source) = resolver.load(None).unwrap();
    assert_eq!(source, Some(env_path.clone()));
    assert_eq!(config.logging.level, "debug");
    assert!(config.output.parallel);

    env::remove_var(TEST_ENV_VAR);
}

#[test]
#[serial]
fn test_blank_env_var_ignored() {
    env::set_var(TEST_ENV_VAR, "   ");

    let resolver = ConfigResolver::with_env_var(TEST_ENV_VAR);
    let resolved = resolver.resolve_path(None);
    // Falls through to the platform default, which only resolves when present
    if let Some(path) = resolved {
        assert!(path.exists());
    }

    env::remove_var(TEST_ENV_VAR);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist.toml");

    let resolver = ConfigResolver::with_env_var(TEST_ENV_VAR);
    let err = resolver.load(Some(&missing)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_malformed_explicit_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "bad.toml", "[logging\nlevel = ");

    let err = TomlConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Parse TOML failed"));
}

#[test]
fn test_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = TomlConfig::default();
    config.output.format = OutputFormat::Text;
    config.logging.level = "warn".to_string();

    let path = write_config(&temp_dir, "saved.toml", &toml::to_string(&config).unwrap());
    assert_eq!(TomlConfig::load(&path).unwrap(), config);
}
