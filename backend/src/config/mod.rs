//! Configuration management for the Calorie Coach backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: CC__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// AI/LLM configuration
///
/// The key lives here as a plain string only for layered loading; it is
/// wrapped in a `Secret` as soon as the client is constructed and never
/// logged. Keys are supplied via `CC__AI__API_KEY`, never source code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: bool,
    /// Base URL of an OpenAI-compatible chat-completions API
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1".to_string(),
            api_key: String::new(),
            model: "qwen-turbo".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with CC__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (CC__ prefix)
            // e.g., CC__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("CC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
