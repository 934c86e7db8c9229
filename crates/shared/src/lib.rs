//! Shared types, errors, and configuration for the Dutch pay calculator.
//!
//! This crate provides common types used across all other crates:
//! - Participant IDs
//! - Amount formatting with thousands grouping
//! - Display locales
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

#[cfg(test)]
mod error_tests;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
