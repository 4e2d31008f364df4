//! # Error Types
//!
//! Domain error taxonomy for the summarization pipeline.

/// A single invalid field found while constructing a configuration value.
///
/// Displays as `"<field> <constraint>"`, e.g. `max_tokens must be positive`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} {constraint}")]
pub struct ConfigurationError {
    field: &'static str,
    constraint: String,
}

impl ConfigurationError {
    /// Create a configuration error for `field` violating `constraint`
    pub fn new<S: Into<String>>(field: &'static str, constraint: S) -> Self {
        Self { field, constraint: constraint.into() }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The violated constraint
    pub fn constraint(&self) -> &str {
        &self.constraint
    }
}

/// Errors raised by the summarization pipeline
#[derive(thiserror::Error, Debug)]
pub enum SummaryError {
    /// A generation parameter failed validation
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Input text is empty or whitespace only
    #[error("Text cannot be empty")]
    EmptyInput,

    /// Trimmed input text is below the minimum length
    #[error("Text is too short to summarize (minimum {min} characters, got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Raw input text exceeds the maximum length
    #[error("Text is too long (maximum {max} characters, got {actual})")]
    TooLong { max: usize, actual: usize },

    /// The model answered with a blank summary
    #[error("Failed to generate summary: empty result")]
    EmptyResult,

    /// The call to the model endpoint failed
    #[error("Failed to summarize text: {source}")]
    SummarizationFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SummaryError {
    /// Wrap a downstream failure
    pub fn summarization_failed<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::SummarizationFailed { source: source.into() }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        !matches!(self, SummaryError::SummarizationFailed { .. })
    }

    /// Get the HTTP status code that should be returned for this error
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else {
            500
        }
    }

    /// Machine readable error code for API clients
    pub fn error_code(&self) -> &'static str {
        if self.is_validation() {
            "VALIDATION_ERROR"
        } else {
            "SUMMARIZATION_ERROR"
        }
    }
}

/// Flatten `validator` field errors into `field: message; field: message`.
pub(crate) fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message.as_ref().map_or_else(|| e.code.to_string(), |m| m.to_string())
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect();
    fields.sort();
    fields.join("; ")
}
