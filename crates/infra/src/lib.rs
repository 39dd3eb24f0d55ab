//! # tabsync Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP transport with retry semantics
//! - Tableau REST session and typed resource operations
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `tabsync-core`
//! - Depends on `tabsync-domain` and `tabsync-core`
//! - Contains all "impure" code (network I/O, environment, files)

pub mod config;
pub mod http;
pub mod rest;

// Re-export commonly used items
pub use http::HttpClient;
pub use rest::{RestClient, Session};
