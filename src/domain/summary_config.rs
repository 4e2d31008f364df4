//! Summary configuration value objects
//!
//! [`SummaryConfig`] controls how a summary is generated and
//! [`ConnectionConfig`] describes how to reach the model endpoint. Both are
//! validated when they are built and cannot be modified afterwards; an invalid
//! field is rejected with a [`ConfigurationError`], never clamped.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ConfigurationError;

pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MODEL_NAME: &str = "qwen/qwen3-4b";
pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;

pub const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";
pub const DEFAULT_API_KEY: &str = "lm-studio";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Style of summary requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SummaryType {
    #[default]
    Concise,
    Detailed,
    BulletPoints,
}

impl SummaryType {
    pub const ALL: [SummaryType; 3] =
        [SummaryType::Concise, SummaryType::Detailed, SummaryType::BulletPoints];

    /// Wire name of the summary type
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryType::Concise => "concise",
            SummaryType::Detailed => "detailed",
            SummaryType::BulletPoints => "bullet_points",
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or_else(|| {
            ConfigurationError::new(
                "summary_type",
                format!("must be one of: {}", join_names(Self::ALL.iter().map(Self::as_str))),
            )
        })
    }
}

/// Output language of the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Korean,
    English,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Korean, Language::English, Language::Japanese];

    /// Wire name of the language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Korean => "korean",
            Language::English => "english",
            Language::Japanese => "japanese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|l| l.as_str() == s).ok_or_else(|| {
            ConfigurationError::new(
                "language",
                format!("must be one of: {}", join_names(Self::ALL.iter().map(Self::as_str))),
            )
        })
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Generation parameters for one summarization request
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    max_tokens: u32,
    temperature: f32,
    model_name: String,
    summary_type: SummaryType,
    language: Language,
}

impl SummaryConfig {
    /// Build a validated configuration
    pub fn new(
        max_tokens: u32,
        temperature: f32,
        model_name: impl Into<String>,
        summary_type: SummaryType,
        language: Language,
    ) -> Result<Self, ConfigurationError> {
        if max_tokens == 0 {
            return Err(ConfigurationError::new("max_tokens", "must be positive"));
        }

        // `contains` is false for NaN as well
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(ConfigurationError::new(
                "temperature",
                format!("must be in [{:.1}, {:.1}]", MIN_TEMPERATURE, MAX_TEMPERATURE),
            ));
        }

        let model_name = model_name.into();
        if model_name.trim().is_empty() {
            return Err(ConfigurationError::new("model_name", "must not be empty"));
        }

        Ok(Self { max_tokens, temperature, model_name, summary_type, language })
    }

    /// Start a builder seeded with the built-in defaults
    pub fn builder() -> SummaryConfigBuilder {
        SummaryConfigBuilder::default()
    }

    /// Start a builder seeded with this configuration's values
    pub fn to_builder(&self) -> SummaryConfigBuilder {
        SummaryConfigBuilder { base: self.clone(), ..Default::default() }
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn summary_type(&self) -> SummaryType {
        self.summary_type
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            summary_type: SummaryType::default(),
            language: Language::default(),
        }
    }
}

/// Builder for [`SummaryConfig`]
///
/// Unset fields keep the values of the seed configuration. Enum fields are
/// accepted by wire name so that unknown names surface as a
/// [`ConfigurationError`] from [`SummaryConfigBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SummaryConfigBuilder {
    base: SummaryConfig,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    model_name: Option<String>,
    summary_type: Option<String>,
    language: Option<String>,
}

impl SummaryConfigBuilder {
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    pub fn summary_type(mut self, summary_type: impl Into<String>) -> Self {
        self.summary_type = Some(summary_type.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Validate every field and produce the configuration
    pub fn build(self) -> Result<SummaryConfig, ConfigurationError> {
        let summary_type = match self.summary_type {
            Some(name) => name.parse()?,
            None => self.base.summary_type,
        };
        let language = match self.language {
            Some(name) => name.parse()?,
            None => self.base.language,
        };

        SummaryConfig::new(
            self.max_tokens.unwrap_or(self.base.max_tokens),
            self.temperature.unwrap_or(self.base.temperature),
            self.model_name.unwrap_or(self.base.model_name),
            summary_type,
            language,
        )
    }
}

/// Connection parameters for the model endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    base_url: String,
    api_key: String,
    timeout_seconds: u64,
    max_retries: u32,
}

impl ConnectionConfig {
    /// Build a validated connection configuration
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_seconds: u64,
        max_retries: u32,
    ) -> Result<Self, ConfigurationError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ConfigurationError::new("base_url", "must not be empty"));
        }

        match url::Url::parse(&base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(_) => {
                return Err(ConfigurationError::new("base_url", "must use http or https"));
            }
            Err(e) => {
                return Err(ConfigurationError::new(
                    "base_url",
                    format!("must be a valid URL ({})", e),
                ));
            }
        }

        if timeout_seconds == 0 {
            return Err(ConfigurationError::new("timeout_seconds", "must be positive"));
        }

        Ok(Self { base_url, api_key: api_key.into(), timeout_seconds, max_retries })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

// Keeps the API key out of logs
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
