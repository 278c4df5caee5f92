use std::net::SocketAddr;

use crate::app_config::{AppConfig, Environment, DEFAULT_REGISTRY_BASE_URL};
use crate::ConfigError;

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
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("VTCREG_ENV", "development"));

    let bind_addr = or_default("VTCREG_BIND_ADDR", "0.0.0.0:8080")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("VTCREG_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("VTCREG_LOG_LEVEL", "info");

    let registry_base_url = or_default("VTCREG_REGISTRY_BASE_URL", DEFAULT_REGISTRY_BASE_URL)
        .trim()
        .trim_end_matches('/')
        .to_string();
    if registry_base_url.is_empty() {
        return Err(invalid(
            "VTCREG_REGISTRY_BASE_URL",
            "must not be empty".to_string(),
        ));
    }

    let request_timeout_secs = or_default("VTCREG_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("VTCREG_REQUEST_TIMEOUT_SECS", e.to_string()))?;

    let user_agent = or_default("VTCREG_USER_AGENT", "vtcreg/0.1 (registry-lookup)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        registry_base_url,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
