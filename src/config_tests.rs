#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use super::*;

fn load(vars: &[(&str, &str)]) -> Result<Config> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(Path::new("/data/finbot"), |key| env.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[]).unwrap();
    assert_eq!(config.db_path, Path::new("/data/finbot/finbot.db"));
    assert_eq!(config.export_dir, Path::new("/data/finbot/exports"));
    assert_eq!(config.log_path, Path::new("/data/finbot/finbot.log"));
    assert_eq!(config.user, User::new("local"));
    assert_eq!(config.log_level, LevelFilter::WARN);
}

#[test]
fn test_user_falls_back_to_login_name() {
    let config = load(&[("USER", "sari")]).unwrap();
    assert_eq!(config.user.id, "sari");

    let config = load(&[("USER", "sari"), ("FINBOT_USER", "6281234")]).unwrap();
    assert_eq!(config.user.id, "6281234");
}

#[test]
fn test_overrides() {
    let config = load(&[
        ("FINBOT_DB", "/tmp/test.db"),
        ("FINBOT_EXPORT_DIR", "/tmp/out"),
        ("FINBOT_NAME", " Budi "),
        ("FINBOT_LOG", "debug"),
    ])
    .unwrap();
    assert_eq!(config.db_path, Path::new("/tmp/test.db"));
    assert_eq!(config.export_dir, Path::new("/tmp/out"));
    assert_eq!(config.user.name.as_deref(), Some("Budi"));
    assert_eq!(config.log_level, LevelFilter::DEBUG);
}

#[test]
fn test_blank_values_are_ignored() {
    let config = load(&[("FINBOT_DB", "  "), ("FINBOT_NAME", ""), ("FINBOT_LOG", "")]).unwrap();
    assert_eq!(config.db_path, Path::new("/data/finbot/finbot.db"));
    assert!(config.user.name.is_none());
    assert_eq!(config.log_level, LevelFilter::WARN);
}

#[test]
fn test_invalid_log_level() {
    let err = load(&[("FINBOT_LOG", "loud")]).unwrap_err();
    assert!(err.to_string().contains("FINBOT_LOG"));
}
