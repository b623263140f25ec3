//! Configuration management for the Aura services.
//!
//! Configuration lives in an optional `~/.aura/config.json`; a missing file
//! yields pure defaults.
//!
//! # Configuration Priority
//!
//! 1. Environment variables
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `AURA_PORT` → server.port
//! - `AURA_BIND_ADDRESS` → network.bind
//! - `AURA_LOG_LEVEL` → observability.log_level
//! - `AURA_LOG_FORMAT` → observability.log_format
//! - `GROQ_API_KEY` → secrets.groq_api_key

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".aura"),
        |dirs| dirs.home_dir().join(".aura"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Global network configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Bind address for the API server.
    /// Default: "0.0.0.0" (the relay fronts a browser client)
    #[serde(default = "default_bind_address")]
    pub bind: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".into()
}

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port number for the API server
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

/// LLM provider call parameters.
///
/// The endpoint URL itself is a fixed constant owned by the provider client;
/// only the sampling and budget knobs live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model identifier sent to the chat-completion endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature (low favors a deterministic JSON reply)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Token budget for the expected short JSON reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i64,

    /// Outbound call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".into()
}

fn default_temperature() -> f64 {
    0.3
}

fn default_max_tokens() -> i64 {
    200
}

fn default_timeout_secs() -> u64 {
    10
}

/// Sensitive credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretsConfig {
    /// Groq API key. Absence is a valid degraded state: the health probe
    /// reports it and every analyze call fails fast with a config error.
    #[serde(default)]
    pub groq_api_key: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

/// Unified configuration for the Aura services.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub secrets: SecretsConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable overrides applied.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("AURA_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(bind) = std::env::var("AURA_BIND_ADDRESS") {
            self.network.bind = bind;
        }

        if let Ok(level) = std::env::var("AURA_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Ok(format) = std::env::var("AURA_LOG_FORMAT") {
            self.observability.log_format = format;
        }

        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                self.secrets.groq_api_key = Some(key);
            }
        }
    }

    /// Get the Groq API key, if configured.
    pub fn groq_api_key(&self) -> Option<&str> {
        self.secrets
            .groq_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
    }
}
