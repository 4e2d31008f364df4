//! Domain ID Types with NewType Pattern
//!
//! Type-safe wrapper for summary identifiers. Serializes as a plain string so
//! it can be used directly in response DTOs.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Unique identifier for a generated summary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "6f1c2a4e-8b1d-4c7e-9a52-3d0f5e7b2c91")]
pub struct SummaryId(String);

impl SummaryId {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an ID from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl Default for SummaryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SummaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_id_creation() {
        let id = SummaryId::new();
        assert!(!id.as_str().is_empty());
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn summary_id_display() {
        let id = SummaryId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn summary_id_serializes_as_plain_string() {
        let id = SummaryId::from_string("test-id".to_string());
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"test-id\"");

        let back: SummaryId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn default_creates_unique_ids() {
        assert_ne!(SummaryId::default(), SummaryId::default());
    }
}
