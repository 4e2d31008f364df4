//! HTTP request handlers organized by resource type

pub mod health;
pub mod summary;

pub use health::{app_health_handler, summary_health_handler};
pub use summary::summarize_handler;
