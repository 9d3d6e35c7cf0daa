use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub meili_url: String,
    pub meili_key: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("RUST_PORT", "8080")?,
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379")?,
            meili_url: try_load("MEILI_URL", "http://127.0.0.1:7700")?,
            meili_key: read_secret("MEILI_ADMIN_KEY")?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found");
        })
        .ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: Display,
{
    raw.parse()
        .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}

/// Docker secret first, then the plain environment variable.
fn read_secret(secret_name: &str) -> Result<String> {
    let path = format!("/run/secrets/{secret_name}");

    match read_to_string(&path) {
        Ok(secret) => Ok(secret.trim().to_string()),
        Err(e) => {
            warn!("Failed to read {secret_name} from file: {e}");

            var(secret_name)
                .map(|secret| secret.trim().to_string())
                .ok_or_else(|| anyhow!("{secret_name} missing from {path} and the environment"))
        }
    }
}
