use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_DIRECTORY_PATH: &str = "./config/directory.yaml";
pub const DEFAULT_TOKEN_PATH: &str = "./.fashionhub/session.json";
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("FASHIONHUB_ENV", "development"))?;
    let log_level = or_default("FASHIONHUB_LOG_LEVEL", "info");
    let directory_path = PathBuf::from(or_default(
        "FASHIONHUB_DIRECTORY_PATH",
        DEFAULT_DIRECTORY_PATH,
    ));
    let token_path = PathBuf::from(or_default("FASHIONHUB_TOKEN_PATH", DEFAULT_TOKEN_PATH));
    let featured_count = parse_usize("FASHIONHUB_FEATURED_COUNT", DEFAULT_FEATURED_COUNT)?;

    let api_url = match lookup("FASHIONHUB_API_URL") {
        Ok(raw) if raw.trim().is_empty() => None,
        Ok(raw) => {
            let trimmed = raw.trim();
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(ConfigError::InvalidEnvVar {
                    var: "FASHIONHUB_API_URL".to_string(),
                    reason: format!("'{trimmed}' must start with http:// or https://"),
                });
            }
            Some(trimmed.trim_end_matches('/').to_string())
        }
        Err(_) => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        directory_path,
        token_path,
        featured_count,
        api_url,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FASHIONHUB_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
