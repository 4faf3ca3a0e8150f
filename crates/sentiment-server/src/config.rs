//! Server configuration read from environment variables.
//!
//! Every variable is optional; the defaults reproduce a local development
//! setup (`127.0.0.1:8000`, the Cardiff Twitter RoBERTa model on CPU, a Vite
//! dev server as the only cross-origin caller).

use axum::http::HeaderValue;
use sentiment_core::{DeviceSpec, ModelSource, DEFAULT_MODEL_ID, DEFAULT_REVISION};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model: ModelSource,
    pub device: DeviceSpec,
    pub allowed_origin: HeaderValue,
}

impl ServerConfig {
    /// Reads `SENTIMENT_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SENTIMENT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("SENTIMENT_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "SENTIMENT_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let repo_id = lookup("SENTIMENT_MODEL").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let revision =
            lookup("SENTIMENT_MODEL_REVISION").unwrap_or_else(|| DEFAULT_REVISION.to_string());
        let model = ModelSource::new(&repo_id).with_revision(&revision);

        let device = match lookup("SENTIMENT_DEVICE") {
            Some(raw) => raw.parse::<DeviceSpec>().map_err(|e| ConfigError::Invalid {
                key: "SENTIMENT_DEVICE",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DeviceSpec::Cpu,
        };

        let origin = lookup("SENTIMENT_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin =
            HeaderValue::from_str(&origin).map_err(|e| ConfigError::Invalid {
                key: "SENTIMENT_ALLOWED_ORIGIN",
                value: origin.clone(),
                reason: e.to_string(),
            })?;

        Ok(ServerConfig {
            host,
            port,
            model,
            device,
            allowed_origin,
        })
    }

    /// `host:port` string for the listener; hostnames are resolved at bind time.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
