//! HTTP transport with retry semantics

mod client;

pub use client::{HttpClient, HttpClientBuilder};
