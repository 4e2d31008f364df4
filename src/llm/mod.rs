//! # LLM Integration
//!
//! Outbound side of the service: an OpenAI-compatible chat client, the
//! summarization prompts, and the [`LlmSummaryRepository`] that ties them to
//! the domain's [`crate::domain::SummaryRepository`] trait.

pub mod client;
pub mod prompts;
pub mod repository;

pub use client::{ChatClient, ChatClientError, ChatMessage, ChatRequest, ChatRole};
pub use repository::LlmSummaryRepository;
