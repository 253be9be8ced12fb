//! Integration tests for Settings layered loading.
//!
//! Layers: defaults < config file < TREESCAN_* env vars < CLI flags.
//! Env vars are passed as explicit maps so tests never touch the process environment.

use std::collections::HashMap;
use std::fs;

use clap::Parser;
use tempfile::TempDir;

use treescan::cli::Cli;
use treescan::config::{OutputFormat, Settings, SettingsError};

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

// ============================================================
// Config file layer
// ============================================================

#[test]
fn given_config_file_when_load_then_file_values_replace_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treescan.toml");
    fs::write(
        &path,
        r#"
mean = 10.0
std_dev = 2.0
seed = 1234
format = "tree"
lhs_label = "left"
"#,
    )
    .unwrap();

    let settings = Settings::load_with_env(Some(&path), no_env()).expect("load settings");

    assert_eq!(settings.mean, 10.0);
    assert_eq!(settings.std_dev, 2.0);
    assert_eq!(settings.seed, Some(1234));
    assert_eq!(settings.format, OutputFormat::Tree);
    assert_eq!(settings.lhs_label, "left");
    // not in the file: compiled default
    assert_eq!(settings.rhs_label, "foo");
}

#[test]
fn given_missing_config_file_when_load_then_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Settings::load_with_env(Some(&path), no_env());

    assert!(matches!(result, Err(SettingsError::NotFound(p)) if p == path));
}

#[test]
fn given_malformed_config_file_when_load_then_returns_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treescan.toml");
    fs::write(&path, "mean = \"not a number\"\n").unwrap();

    let result = Settings::load_with_env(Some(&path), no_env());

    assert!(matches!(result, Err(SettingsError::Invalid(_))), "{:?}", result);
}

// ============================================================
// Precedence
// ============================================================

#[test]
fn given_file_and_env_when_load_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treescan.toml");
    fs::write(&path, "mean = 10.0\nstd_dev = 2.0\n").unwrap();
    let env = HashMap::from([("TREESCAN_STD_DEV".to_string(), "7.5".to_string())]);

    let settings = Settings::load_with_env(Some(&path), Some(env)).expect("load settings");

    assert_eq!(settings.mean, 10.0);
    assert_eq!(settings.std_dev, 7.5);
}

#[test]
fn given_env_and_cli_when_applied_then_cli_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treescan.toml");
    fs::write(&path, "seed = 1\n").unwrap();
    let env = HashMap::from([("TREESCAN_SEED".to_string(), "2".to_string())]);
    let cli = Cli::parse_from(["treescan", "--seed", "3"]);

    let settings = cli.apply_to(Settings::load_with_env(Some(&path), Some(env)).unwrap());

    assert_eq!(settings.seed, Some(3));
}

// ============================================================
// Round trip through --show-config output
// ============================================================

#[test]
fn given_rendered_settings_when_loaded_as_file_then_values_survive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treescan.toml");
    let rendered = Settings {
        mean: -3.25,
        seed: Some(77),
        format: OutputFormat::Tree,
        rhs_label: "other".into(),
        ..Settings::default()
    };
    fs::write(&path, rendered.to_toml().unwrap()).unwrap();

    let loaded = Settings::load_with_env(Some(&path), no_env()).expect("load rendered");

    assert_eq!(loaded, rendered);
}
