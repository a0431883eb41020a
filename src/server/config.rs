use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Origin allowed by CORS; no cross-origin access when unset.
    pub cors_allowed_origin: Option<String>,

    /// Insert sample members, posts and comments into an empty database at startup.
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_allowed_origin: non_empty(std::env::var("CORS_ALLOWED_ORIGIN").ok()),
            seed_sample_data: match std::env::var("SEED_SAMPLE_DATA") {
                Ok(value) => parse_bool("SEED_SAMPLE_DATA", &value)?,
                Err(_) => false,
            },
        })
    }
}

/// Treats a blank value the same as an unset one.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Parses a boolean environment variable value, accepting `true`/`false`/`1`/`0`.
fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
