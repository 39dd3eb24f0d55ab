//! # tabsync Domain
//!
//! Business domain types and models for tabsync.
//!
//! This crate contains:
//! - Domain data types (User, Group, Pagination, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other tabsync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
