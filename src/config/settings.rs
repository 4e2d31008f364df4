//! # Configuration Settings
//!
//! Flat application settings loaded from environment variables (and a `.env`
//! file when present). Every field has a default, so an empty environment
//! yields a runnable configuration pointed at a local LM Studio.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::summary_config::{
    DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL_NAME, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECONDS,
};
use crate::domain::{ConnectionConfig, SummaryConfig};
use crate::errors::{Error, Result};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    /// Service name reported by the health endpoints
    #[validate(length(min = 1, message = "App name cannot be empty"))]
    pub app_name: String,

    pub app_version: String,

    /// Forces debug-level logging
    pub debug: bool,

    /// Prefix all application routes are mounted under
    #[validate(length(min = 1, message = "API prefix cannot be empty"))]
    pub api_v1_prefix: String,

    /// Allowed CORS origins; `*` allows any
    pub cors_allow_origins: Vec<String>,

    #[validate(length(min = 1, message = "Server host cannot be empty"))]
    pub server_host: String,

    #[validate(range(min = 1, message = "Server port must be between 1 and 65535"))]
    pub server_port: u16,

    /// Base URL of the OpenAI-compatible endpoint
    #[validate(url(message = "LM Studio base URL must be a valid URL"))]
    pub lmstudio_base_url: String,

    pub lmstudio_api_key: String,

    /// Per-request timeout in seconds
    #[validate(range(min = 1, max = 600, message = "Timeout must be between 1 and 600 seconds"))]
    pub lmstudio_timeout: u64,

    #[validate(range(max = 10, message = "Max retries must be at most 10"))]
    pub lmstudio_max_retries: u32,

    #[validate(length(min = 1, message = "Default model name cannot be empty"))]
    pub default_model_name: String,

    #[validate(range(min = 1, message = "Default max tokens must be positive"))]
    pub default_max_tokens: u32,

    #[validate(range(min = 0.0, max = 2.0, message = "Default temperature must be in [0.0, 2.0]"))]
    pub default_temperature: f32,

    pub default_summary_type: String,

    pub default_language: String,

    pub log_level: String,

    /// Emit logs as JSON lines
    pub json_logging: bool,

    /// Install the Prometheus exporter
    pub enable_metrics: bool,

    #[validate(range(min = 1, message = "Metrics port must be between 1 and 65535"))]
    pub metrics_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: crate::APP_NAME.to_string(),
            app_version: crate::VERSION.to_string(),
            debug: false,
            api_v1_prefix: "/api/v1".to_string(),
            cors_allow_origins: vec!["*".to_string()],
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            lmstudio_base_url: DEFAULT_BASE_URL.to_string(),
            lmstudio_api_key: DEFAULT_API_KEY.to_string(),
            lmstudio_timeout: DEFAULT_TIMEOUT_SECONDS,
            lmstudio_max_retries: DEFAULT_MAX_RETRIES,
            default_model_name: DEFAULT_MODEL_NAME.to_string(),
            default_max_tokens: DEFAULT_MAX_TOKENS,
            default_temperature: DEFAULT_TEMPERATURE,
            default_summary_type: "concise".to_string(),
            default_language: "korean".to_string(),
            log_level: "info".to_string(),
            json_logging: false,
            enable_metrics: false,
            metrics_port: 9090,
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(environment())
    }

    /// Load settings from an explicit variable map instead of the process
    /// environment. Keys use the same upper-case names.
    pub fn from_source(vars: config::Map<String, String>) -> Result<Self> {
        Self::load(environment().source(Some(vars)))
    }

    fn load(source: config::Environment) -> Result<Self> {
        let settings: Settings =
            config::Config::builder().add_source(source).build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate field rules and cross-field constraints
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self)?;
        self.validate_custom()?;

        // Typed views must also construct
        self.connection_config()?;
        self.default_summary_config()?;

        Ok(())
    }

    fn validate_custom(&self) -> Result<()> {
        if !self.api_v1_prefix.starts_with('/') {
            return Err(Error::config("API prefix must start with '/'"));
        }

        if self.enable_metrics && self.metrics_port == self.server_port {
            return Err(Error::config("Server and metrics ports cannot be the same"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(Error::config(format!(
                "Log level must be one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Connection parameters for the model endpoint
    pub fn connection_config(&self) -> Result<ConnectionConfig> {
        Ok(ConnectionConfig::new(
            self.lmstudio_base_url.clone(),
            self.lmstudio_api_key.clone(),
            self.lmstudio_timeout,
            self.lmstudio_max_retries,
        )?)
    }

    /// Generation parameters used when a request supplies none
    pub fn default_summary_config(&self) -> Result<SummaryConfig> {
        Ok(SummaryConfig::builder()
            .max_tokens(self.default_max_tokens)
            .temperature(self.default_temperature)
            .model_name(self.default_model_name.clone())
            .summary_type(self.default_summary_type.clone())
            .language(self.default_language.clone())
            .build()?)
    }

    /// Server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Metrics exporter bind address, when metrics are enabled
    pub fn metrics_bind_address(&self) -> Option<String> {
        self.enable_metrics.then(|| format!("{}:{}", self.server_host, self.metrics_port))
    }

    /// Whether CORS accepts any origin
    pub fn cors_allows_any_origin(&self) -> bool {
        self.cors_allow_origins.is_empty() || self.cors_allow_origins.iter().any(|o| o == "*")
    }

    /// API prefix without a trailing slash
    pub fn api_prefix(&self) -> &str {
        let trimmed = self.api_v1_prefix.trim_end_matches('/');
        if trimmed.is_empty() {
            "/"
        } else {
            trimmed
        }
    }

    /// Effective log filter directive
    pub fn log_filter(&self) -> String {
        if self.debug {
            "debug".to_string()
        } else {
            self.log_level.to_ascii_lowercase()
        }
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors_allow_origins")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, SummaryType};

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bind_address(), "0.0.0.0:8000");
        assert_eq!(settings.api_prefix(), "/api/v1");
        assert!(settings.cors_allows_any_origin());
        assert!(settings.metrics_bind_address().is_none());
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings = Settings::from_source(vars(&[])).unwrap();
        assert_eq!(settings.lmstudio_base_url, "http://localhost:1234/v1");
        assert_eq!(settings.lmstudio_api_key, "lm-studio");
        assert_eq!(settings.default_model_name, "qwen/qwen3-4b");
        assert_eq!(settings.server_port, 8000);
    }

    #[test]
    fn test_source_overrides() {
        let settings = Settings::from_source(vars(&[
            ("SERVER_PORT", "9000"),
            ("LMSTUDIO_BASE_URL", "http://llm.internal:8080/v1"),
            ("LMSTUDIO_TIMEOUT", "5"),
            ("DEFAULT_TEMPERATURE", "0.7"),
            ("DEFAULT_LANGUAGE", "english"),
            ("CORS_ALLOW_ORIGINS", "http://a.example,http://b.example"),
            ("DEBUG", "true"),
        ]))
        .unwrap();

        assert_eq!(settings.server_port, 9000);
        assert_eq!(settings.lmstudio_timeout, 5);
        assert_eq!(settings.cors_allow_origins, vec!["http://a.example", "http://b.example"]);
        assert!(!settings.cors_allows_any_origin());
        assert_eq!(settings.log_filter(), "debug");

        let connection = settings.connection_config().unwrap();
        assert_eq!(connection.base_url(), "http://llm.internal:8080/v1");
        assert_eq!(connection.timeout_seconds(), 5);

        let config = settings.default_summary_config().unwrap();
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.summary_type(), SummaryType::Concise);
        assert!((config.temperature() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Settings::from_source(vars(&[("SERVER_PORT", "not-a-port")])).is_err());
        assert!(Settings::from_source(vars(&[("LMSTUDIO_TIMEOUT", "0")])).is_err());
        assert!(Settings::from_source(vars(&[("DEFAULT_TEMPERATURE", "2.5")])).is_err());
        assert!(Settings::from_source(vars(&[("DEFAULT_SUMMARY_TYPE", "haiku")])).is_err());
        assert!(Settings::from_source(vars(&[("LMSTUDIO_BASE_URL", "not a url")])).is_err());
    }

    #[test]
    fn test_custom_validation() {
        let settings = Settings { api_v1_prefix: "api/v1".into(), ..Default::default() };
        assert!(settings.validate().is_err());

        let settings =
            Settings { enable_metrics: true, metrics_port: 8000, ..Default::default() };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("ports cannot be the same"));

        let settings = Settings { log_level: "verbose".into(), ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_api_prefix_trailing_slash() {
        let settings = Settings { api_v1_prefix: "/api/v2/".into(), ..Default::default() };
        assert_eq!(settings.api_prefix(), "/api/v2");

        let settings = Settings { api_v1_prefix: "/".into(), ..Default::default() };
        assert_eq!(settings.api_prefix(), "/");
    }

    #[test]
    fn test_metrics_bind_address() {
        let settings = Settings { enable_metrics: true, ..Default::default() };
        assert_eq!(settings.metrics_bind_address().as_deref(), Some("0.0.0.0:9090"));
    }
}
