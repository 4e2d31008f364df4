//! # Error Handling
//!
//! Error types for llmplan, built on `thiserror`.
//!
//! [`Error`] covers startup and infrastructure failures (configuration loading,
//! socket binding, I/O). The summarization pipeline reports through
//! [`SummaryError`], which the HTTP boundary translates into status codes.

pub mod types;

pub use types::{ConfigurationError, SummaryError};

/// Custom result type for llmplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for llmplan infrastructure
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network transport errors (HTTP server and client)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into(), source: None }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>>(
        message: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Config { message: message.into(), source: Some(source) }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }
}

impl From<config::ConfigError> for Error {
    fn from(error: config::ConfigError) -> Self {
        Self::config_with_source("Configuration loading failed", Box::new(error))
    }
}

impl From<ConfigurationError> for Error {
    fn from(error: ConfigurationError) -> Self {
        Self::config(error.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::config(format!("Validation failed: {}", types::describe_validation_errors(&errors)))
    }
}
