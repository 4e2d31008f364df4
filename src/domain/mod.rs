//! Domain layer
//!
//! Pure domain types for text summarization with no HTTP or transport
//! dependencies:
//!
//! - `id`: type-safe summary identifier
//! - `summary_config`: validated generation and connection parameters
//! - `summary`: the summarization result entity
//! - `repository`: the capability trait the service delegates to

pub mod id;
pub mod repository;
pub mod summary;
pub mod summary_config;

pub use id::SummaryId;
pub use repository::SummaryRepository;
pub use summary::Summary;
pub use summary_config::{
    ConnectionConfig, Language, SummaryConfig, SummaryConfigBuilder, SummaryType,
};
