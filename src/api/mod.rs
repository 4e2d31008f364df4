//! # REST API Components
//!
//! HTTP routing, handlers, error mapping and OpenAPI documentation for the
//! summarization service.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod test_utils;

pub use error::ApiError;
pub use routes::{build_router, ApiState};
pub use server::start_api_server;
