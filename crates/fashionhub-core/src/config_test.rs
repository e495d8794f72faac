use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "FASHIONHUB_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.directory_path, PathBuf::from(DEFAULT_DIRECTORY_PATH));
    assert_eq!(cfg.token_path, PathBuf::from(DEFAULT_TOKEN_PATH));
    assert_eq!(cfg.featured_count, 3);
    assert!(cfg.api_url.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("FASHIONHUB_ENV", "production");
    map.insert("FASHIONHUB_LOG_LEVEL", "debug");
    map.insert("FASHIONHUB_DIRECTORY_PATH", "/srv/directory.yaml");
    map.insert("FASHIONHUB_TOKEN_PATH", "/tmp/session.json");
    map.insert("FASHIONHUB_FEATURED_COUNT", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.directory_path, PathBuf::from("/srv/directory.yaml"));
    assert_eq!(cfg.token_path, PathBuf::from("/tmp/session.json"));
    assert_eq!(cfg.featured_count, 5);
}

#[test]
fn build_app_config_rejects_invalid_environment() {
    let mut map = HashMap::new();
    map.insert("FASHIONHUB_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FASHIONHUB_ENV"),
        "expected InvalidEnvVar(FASHIONHUB_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_featured_count() {
    let mut map = HashMap::new();
    map.insert("FASHIONHUB_FEATURED_COUNT", "three");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FASHIONHUB_FEATURED_COUNT"),
        "expected InvalidEnvVar(FASHIONHUB_FEATURED_COUNT), got: {result:?}"
    );
}

#[test]
fn build_app_config_accepts_zero_featured_count() {
    let mut map = HashMap::new();
    map.insert("FASHIONHUB_FEATURED_COUNT", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.featured_count, 0);
}

#[test]
fn build_app_config_trims_api_url() {
    let mut map = HashMap::new();
    map.insert("FASHIONHUB_API_URL", " https://api.fashionhub.example/ ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.api_url.as_deref(),
        Some("https://api.fashionhub.example")
    );
}

#[test]
fn build_app_config_blank_api_url_is_none() {
    let mut map = HashMap::new();
    map.insert("FASHIONHUB_API_URL", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_url.is_none());
}

#[test]
fn build_app_config_rejects_api_url_without_scheme() {
    let mut map = HashMap::new();
    map.insert("FASHIONHUB_API_URL", "api.fashionhub.example");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FASHIONHUB_API_URL"),
        "expected InvalidEnvVar(FASHIONHUB_API_URL), got: {result:?}"
    );
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Production.to_string(), "production");
}
