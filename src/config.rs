//! Environment configuration
//!
//! Read once at startup. A `.env` file in the working directory is loaded
//! first if present; real environment variables take precedence.

use crate::llm::DEFAULT_MODEL;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const PORT_VAR: &str = "CHAT_PORT";
pub const BIND_VAR: &str = "CHAT_BIND";

const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid {var} value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Model endpoint settings, shared by the server and the listing utility
#[derive(Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

impl ModelConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_key: non_empty(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?,
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty(BASE_URL_VAR),
        })
    }
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub listen: SocketAddr,
}

impl Config {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let model = ModelConfig::from_lookup(&lookup)?;
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match non_empty(PORT_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let ip = match non_empty(BIND_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: BIND_VAR,
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        Ok(Self {
            model,
            listen: SocketAddr::new(ip, port),
        })
    }
}

fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_missing_key_is_error() {
        assert!(matches!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(API_KEY_VAR, "   ")])),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[(API_KEY_VAR, "k")])).unwrap();
        assert_eq!(config.model.api_key, "k");
        assert_eq!(config.model.model, DEFAULT_MODEL);
        assert!(config.model.base_url.is_none());
        assert_eq!(config.listen, "127.0.0.1:8501".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (MODEL_VAR, "gemini-2.5-flash"),
            (BASE_URL_VAR, "http://localhost:9999/v1beta"),
            (PORT_VAR, "9000"),
            (BIND_VAR, "0.0.0.0"),
        ]))
        .unwrap();
        assert_eq!(config.model.model, "gemini-2.5-flash");
        assert_eq!(config.model.base_url.as_deref(), Some("http://localhost:9999/v1beta"));
        assert_eq!(config.listen, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_model_config_ignores_server_settings() {
        let model = ModelConfig::from_lookup(lookup(&[(API_KEY_VAR, "k"), (PORT_VAR, "eighty")]))
            .unwrap();
        assert_eq!(model.api_key, "k");
        assert!(matches!(
            ModelConfig::from_lookup(lookup(&[(PORT_VAR, "80")])),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "k"), (PORT_VAR, "eighty")]))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::Invalid { var: PORT_VAR, .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup(&[(API_KEY_VAR, "super-secret")])).unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
