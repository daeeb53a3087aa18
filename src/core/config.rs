//! Process configuration, read once from the environment (after `.env` is loaded).

use std::env;
use std::path::PathBuf;

/// Environment variable holding the Gemini credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Immutable application configuration. A missing API key is a valid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Default configuration with the given credential (blank keys count as absent).
    #[cfg(test)]
    pub fn with_api_key(api_key: Option<&str>) -> Self {
        Self {
            api_key: normalize_key(api_key),
            ..Self::default()
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Socket address string, e.g. "127.0.0.1:8000".
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

fn normalize_key(key: Option<&str>) -> Option<String> {
    key.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

/// Build configuration from a variable lookup. Split out from [`load`] so tests
/// don't have to mutate the process environment.
fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw))?,
        None => DEFAULT_PORT,
    };

    Ok(Config {
        api_key: normalize_key(lookup(API_KEY_VAR).as_deref()),
        api_base: lookup("GEMINI_API_BASE")
            .map(|b| b.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
        static_dir: lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
    })
}

/// Load configuration from the process environment.
/// Only a malformed `PORT` is an error; a missing API key is not.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|name| env::var(name).ok())
}
