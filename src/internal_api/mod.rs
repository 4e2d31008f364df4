//! Internal API Layer
//!
//! Sits between the HTTP handlers and the service layer. It owns the
//! request/response types and the use cases that translate between them and
//! the domain, so handlers stay thin.

pub mod summaries;
pub mod types;

pub use summaries::{HealthCheckUseCase, SummarizeTextUseCase};
pub use types::*;
