use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("CREATORCALC_ENV", "development"))?;

    let bind_addr = parse("CREATORCALC_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CREATORCALC_LOG_LEVEL", "info");
    let profiles_path = PathBuf::from(or_default(
        "CREATORCALC_PROFILES_PATH",
        "./config/profiles.yaml",
    ));

    let api_key_hash_salt = lookup("CREATORCALC_API_KEY_HASH_SALT")
        .ok()
        .filter(|s| !s.trim().is_empty());
    if env == Environment::Production && api_key_hash_salt.is_none() {
        return Err(ConfigError::MissingEnvVar(
            "CREATORCALC_API_KEY_HASH_SALT".to_string(),
        ));
    }

    let rate_limit_max_requests = parse_usize("CREATORCALC_RATE_LIMIT_MAX_REQUESTS", "120")?;
    if rate_limit_max_requests == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CREATORCALC_RATE_LIMIT_MAX_REQUESTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let rate_limit_window_secs = parse_u64("CREATORCALC_RATE_LIMIT_WINDOW_SECS", "60")?;

    let calc_delay_ms = parse_u64("CREATORCALC_CALC_DELAY_MS", "0")?;
    let payment_delay_ms = parse_u64("CREATORCALC_PAYMENT_DELAY_MS", "1000")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        profiles_path,
        api_key_hash_salt,
        rate_limit_max_requests,
        rate_limit_window_secs,
        calc_delay_ms,
        payment_delay_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CREATORCALC_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
