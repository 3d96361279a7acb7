//! Configuration module for the search client
//!
//! This module provides the `SearchConfig` struct and its type-safe builder
//! for configuring the search service connection with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{SearchConfigBuilder, WithBaseUrl};
pub use types::SearchConfig;
