//! Configuration structures

use serde::{Deserialize, Serialize};

/// Connection settings for a Tableau server or Tableau Cloud site.
///
/// Authentication uses a personal access token (PAT); the secret is only
/// ever sent in the sign-in exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Server address, e.g. `https://tableau.example.com`.
    pub server_url: String,
    /// REST API version segment, e.g. `3.22`.
    pub api_version: String,
    /// Site content URL (the tenant key); empty for the default site.
    pub site: String,
    /// Personal access token name.
    pub token_name: String,
    /// Personal access token secret. Never re-serialized.
    #[serde(skip_serializing)]
    pub token_secret: String,
}
