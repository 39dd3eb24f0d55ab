//! Session establishment against the Tableau sign-in endpoint

use reqwest::Method;
use tabsync_domain::{ConnectionConfig, Result, TabsyncError};
use tracing::info;
use url::Url;

use super::wire;
use crate::http::HttpClient;

/// An authenticated session against one Tableau site.
///
/// Established once per process; immutable afterwards. There is no
/// automatic renewal and no explicit sign-out: when the token expires the
/// next call fails and the caller establishes a fresh session.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    token: String,
    site_id: String,
    content_url: String,
    expiry_hint: Option<String>,
}

impl Session {
    /// Sign in with a personal access token and derive the site-scoped base
    /// URL used by every subsequent call.
    ///
    /// The sign-in request itself is the only unauthenticated call the
    /// client ever makes.
    pub async fn establish(http: &HttpClient, config: &ConnectionConfig) -> Result<Self> {
        let server = normalize_server_url(&config.server_url)?;
        let sign_in_url = format!("{}/api/{}/auth/signin", server, config.api_version);

        let request = wire::SignInRequest {
            credentials: wire::SignInCredentials {
                personal_access_token_name: config.token_name.clone(),
                personal_access_token_secret: config.token_secret.clone(),
                site: wire::SiteRef { content_url: config.site.clone() },
            },
        };

        let builder = http
            .request(Method::POST, &sign_in_url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json(&request);

        let body = http
            .send(builder)
            .await
            .map_err(|err| TabsyncError::Auth(format!("sign-in failed: {}", err)))?;

        let response: wire::SignInResponse = serde_json::from_slice(&body)
            .map_err(|err| TabsyncError::Decode(format!("sign-in response: {}", err)))?;

        let credentials = response.credentials;
        let base_url =
            format!("{}/api/{}/sites/{}", server, config.api_version, credentials.site.id);

        info!(
            site_id = %credentials.site.id,
            content_url = %credentials.site.content_url,
            "established Tableau session"
        );

        Ok(Self {
            base_url,
            token: credentials.token,
            site_id: credentials.site.id,
            content_url: credentials.site.content_url,
            expiry_hint: credentials.estimated_time_to_expiration,
        })
    }

    /// Site-scoped API root: `{server}/api/{version}/sites/{siteId}`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Opaque bearer credential for the `X-Tableau-Auth` header.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Server-assigned site identifier.
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Site content URL as echoed by the sign-in response.
    pub fn content_url(&self) -> &str {
        &self.content_url
    }

    /// Advisory time-to-expiration string from sign-in, if the server sent
    /// one. Never enforced.
    pub fn expiry_hint(&self) -> Option<&str> {
        self.expiry_hint.as_deref()
    }
}

/// Validate the server address and trim any trailing slash.
fn normalize_server_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|err| TabsyncError::Config(format!("invalid server URL '{}': {}", raw, err)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(TabsyncError::Config(format!(
                "unsupported server URL scheme '{}': expected http or https",
                other
            )))
        }
    }

    Ok(raw.trim_end_matches('/').to_string())
}
