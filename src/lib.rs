//! # llmplan
//!
//! An HTTP service that summarizes text with an OpenAI-compatible chat model
//! (LM Studio by default).
//!
//! ## Architecture
//!
//! ```text
//! HTTP (axum) → Use cases (internal_api) → SummaryService → SummaryRepository
//!                                                               ↓
//!                                              LlmSummaryRepository → ChatClient
//! ```
//!
//! ## Core Components
//!
//! - **api**: router, handlers, error mapping and OpenAPI docs
//! - **internal_api**: request/response types and use cases
//! - **services**: input rules and result validation
//! - **domain**: summary entity, validated configs and the repository trait
//! - **llm**: prompts and the outbound chat completion client
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use llmplan::{api::{start_api_server, ApiState}, config::Settings, llm::*, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let settings = Settings::from_env()?;
//!     let client = ChatClient::new(&settings.connection_config()?)?;
//!     let state = ApiState::new(
//!         Arc::new(LlmSummaryRepository::new(client)),
//!         settings.default_summary_config()?,
//!         Arc::new(settings.clone()),
//!     );
//!     start_api_server(&settings, state).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod internal_api;
pub mod llm;
pub mod observability;
pub mod services;

pub use config::Settings;
pub use errors::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
