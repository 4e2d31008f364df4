//! Summary entity
//!
//! One completed summarization result. Summaries are created by the
//! repository right after the model call succeeds and are never mutated or
//! persisted; they live for a single request/response cycle.

use chrono::{DateTime, Utc};

use super::id::SummaryId;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    id: SummaryId,
    original_text: String,
    summary_text: String,
    created_at: DateTime<Utc>,
    model_name: String,
    summary_length: Option<usize>,
}

impl Summary {
    /// Create a summary with a fresh identifier and the current timestamp
    pub fn new(
        original_text: impl Into<String>,
        summary_text: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self::with_id(SummaryId::new(), Utc::now(), original_text, summary_text, model_name)
    }

    /// Create a summary with an explicit identifier and timestamp
    pub fn with_id(
        id: SummaryId,
        created_at: DateTime<Utc>,
        original_text: impl Into<String>,
        summary_text: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        let summary_text = summary_text.into();
        let summary_length =
            if summary_text.is_empty() { None } else { Some(summary_text.chars().count()) };

        Self {
            id,
            original_text: original_text.into(),
            summary_text,
            created_at,
            model_name: model_name.into(),
            summary_length,
        }
    }

    pub fn id(&self) -> &SummaryId {
        &self.id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn summary_text(&self) -> &str {
        &self.summary_text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Character count of the summary, `None` when no summary text was produced
    pub fn summary_length(&self) -> Option<usize> {
        self.summary_length
    }

    /// Character count of the original text
    pub fn original_length(&self) -> usize {
        self.original_text.chars().count()
    }

    /// Whether the summary text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.summary_text.trim().is_empty()
    }
}
