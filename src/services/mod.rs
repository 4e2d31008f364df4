//! Business logic services
//!
//! This module contains service layer components that encapsulate
//! business logic, separated from HTTP concerns.

pub mod summary_service;

pub use summary_service::{validate_text, SummaryService, MAX_TEXT_LENGTH, MIN_TEXT_LENGTH};
