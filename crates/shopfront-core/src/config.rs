use crate::app_config::{AppConfig, Environment};
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
/// Kept separate from the process environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SHOPFRONT_ENV", "development"));
    let bind_addr = parse_addr("SHOPFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SHOPFRONT_LOG_LEVEL", "info");

    let catalog_source = or_default("SHOPFRONT_CATALOG_SOURCE", "./data/products.json");
    if catalog_source.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPFRONT_CATALOG_SOURCE".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let currency_prefix = or_default("SHOPFRONT_CURRENCY_PREFIX", "₱");
    let fetch_timeout_secs = parse_u64("SHOPFRONT_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_user_agent = or_default("SHOPFRONT_USER_AGENT", "shopfront/0.1 (catalog)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_source,
        currency_prefix,
        fetch_timeout_secs,
        fetch_user_agent,
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
