//! Integration tests for configuration loading and dotted-path lookup.
//!
//! Exercises the full path: candidate search, YAML parsing, the
//! process-scoped cell, and key resolution with default fallback.

use activist_config::config::{Config, ConfigCell, SearchPaths};
use activist_config::error::ConfigError;
use activist_config::lookup;
use serde_yaml::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Representative application config used across tests.
fn app_config_yaml() -> &'static str {
    r#"
app:
  debug: true
  name: x
database:
  host: localhost
  port: 5432
  replicas:
    - db1
    - db2
features:
  beta: null
"#
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn load_sample(dir: &TempDir) -> Config {
    let path = write_file(dir, "config.yml", app_config_yaml());
    Config::load_from(&path).unwrap()
}

#[test]
fn test_round_trip_fidelity() {
    let temp = TempDir::new().unwrap();
    let config = load_sample(&temp);

    assert_eq!(config.get("app.debug"), &Value::Bool(true));
    assert_eq!(config.get_str("app.name"), Some("x"));
    assert_eq!(config.get_u64("database.port"), Some(5432));

    let database = config.get("database");
    assert!(database.is_mapping());
    assert_eq!(database.get("host").and_then(Value::as_str), Some("localhost"));

    let replicas = config.get("database.replicas").as_sequence().unwrap();
    assert_eq!(replicas.len(), 2);
    assert_eq!(replicas[1].as_str(), Some("db2"));
}

#[test]
fn test_missing_path_returns_default_exactly() {
    let temp = TempDir::new().unwrap();
    let config = load_sample(&temp);

    let fallback = Value::String("fallback".into());
    assert_eq!(config.get_or("app.missing", &fallback), &fallback);
    assert_eq!(config.get("app.missing"), &Value::Null);
    assert_eq!(config.get("entirely.absent.path"), &Value::Null);
}

#[test]
fn test_traversal_across_non_mapping_returns_default() {
    let temp = TempDir::new().unwrap();
    let config = load_sample(&temp);

    // app.name is the string "x"; descending past it is a miss, not an error
    assert_eq!(config.get("app.name.sub"), &Value::Null);

    let fallback = Value::from(9);
    assert_eq!(config.get_or("database.port.inner", &fallback), &fallback);
}

#[test]
fn test_explicit_null_collapses_to_default() {
    let temp = TempDir::new().unwrap();
    let config = load_sample(&temp);

    // features.beta is stored as an explicit null; the stored null is
    // never returned, only the caller's substitute
    let fallback = Value::String("fallback".into());
    assert_eq!(config.get_or("features.beta", &fallback), &fallback);
    assert_eq!(config.get("features.beta"), &Value::Null);
}

#[test]
fn test_search_precedence_first_match_wins() {
    let temp = TempDir::new().unwrap();
    let project = write_file(&temp, "project.yml", "tier: project");
    let user = write_file(&temp, "user.yml", "tier: user");
    let system = write_file(&temp, "system.yml", "tier: system");

    let paths = SearchPaths::with_candidates(vec![project.clone(), user.clone(), system]);
    let config = Config::load_with_paths(&paths).unwrap();
    assert_eq!(config.get_str("tier"), Some("project"));

    // Drop the project candidate and the user tier takes over
    std::fs::remove_file(&project).unwrap();
    let config = Config::load_with_paths(&paths).unwrap();
    assert_eq!(config.get_str("tier"), Some("user"));

    std::fs::remove_file(&user).unwrap();
    let config = Config::load_with_paths(&paths).unwrap();
    assert_eq!(config.get_str("tier"), Some("system"));
}

#[test]
fn test_no_candidate_fails_with_not_found() {
    let temp = TempDir::new().unwrap();
    let paths = SearchPaths::with_candidates(vec![
        temp.path().join("config.yml"),
        temp.path().join("nested/config.yml"),
    ]);

    let err = Config::load_with_paths(&paths).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound));
}

#[test]
fn test_cell_loads_once_per_process_scope() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "config.yml", app_config_yaml());
    let paths = SearchPaths::with_candidates(vec![path.clone()]);

    let cell = ConfigCell::new();
    let first = cell.get_or_load(&paths).unwrap();

    // The file is gone, yet the handle keeps serving the cached document
    std::fs::remove_file(&path).unwrap();
    let second = cell.get_or_load(&paths).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.get_bool("app.debug"), Some(true));
}

#[test]
fn test_cell_failed_load_retries_on_next_access() {
    let temp = TempDir::new().unwrap();
    let candidate = temp.path().join("config.yml");
    let paths = SearchPaths::with_candidates(vec![candidate.clone()]);

    let cell = ConfigCell::new();
    assert!(matches!(
        cell.get_or_load(&paths),
        Err(ConfigError::NotFound)
    ));

    std::fs::write(&candidate, "tier: late").unwrap();
    let config = cell.get_or_load(&paths).unwrap();
    assert_eq!(config.get_str("tier"), Some("late"));
}

#[test]
fn test_lookup_adapter_returns_single_element_list() {
    let temp = TempDir::new().unwrap();
    let config = load_sample(&temp);

    let resolved = lookup::run(&config, &["database.host".to_string()]).unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].as_str(), Some("localhost"));

    let missed = lookup::run(&config, &["app.name.sub".to_string()]).unwrap();
    assert_eq!(missed, vec![Value::Null]);

    assert!(matches!(
        lookup::run(&config, &[]),
        Err(ConfigError::MissingTerm)
    ));
}

#[test]
fn test_malformed_document_propagates_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "config.yml", "app: {debug: true");

    match Config::load_from(&path) {
        Err(ConfigError::Parse { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}
