//! Tableau REST client: session lifecycle and typed resource operations.
//!
//! The client is constructed once via [`RestClient::connect`] and passed by
//! reference to everything that needs it; the session token is read-only
//! after construction, so shared references across tasks are safe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tabsync_core::MembershipDirectory;
use tabsync_domain::{ConnectionConfig, Result, TabsyncError};

use crate::http::HttpClient;

mod groups;
mod memberships;
mod session;
mod users;
pub(crate) mod wire;

pub use session::Session;

/// One page is requested per list call, at this size. Listing does not walk
/// the cursor; an overflowing total is logged, not truncated silently.
pub const MAX_PAGE_SIZE: u32 = 1000;

const CALL_TIMEOUT_SECS: u64 = 10;
const MAX_ATTEMPTS: usize = 3;
const RETRY_DELAY_SECS: u64 = 5;

/// Authenticated client for one Tableau site.
///
/// Owns the transport and the established [`Session`]; every resource
/// operation is a method on this type.
pub struct RestClient {
    http: HttpClient,
    session: Session,
}

impl RestClient {
    /// Sign in and return a ready client.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(CALL_TIMEOUT_SECS))
            .max_attempts(MAX_ATTEMPTS)
            .retry_delay(Duration::from_secs(RETRY_DELAY_SECS))
            .build()?;

        let session = Session::establish(&http, config).await?;

        Ok(Self { http, session })
    }

    /// Build a client from parts. Used by tests to shorten retry delays.
    pub fn from_parts(http: HttpClient, session: Session) -> Self {
        Self { http, session }
    }

    /// The established session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for a path under the site-scoped API root.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.session.base_url(), path)
    }

    /// Request builder with the fixed headers every authenticated call
    /// carries.
    pub(crate) fn authed(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("X-Tableau-Auth", self.session.token())
    }

    /// Send a body-less request and decode the JSON response.
    pub(crate) async fn call<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.http.send(builder).await?;
        decode(&body)
    }

    /// Send a JSON body and decode the JSON response.
    pub(crate) async fn call_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T> {
        self.call(builder.json(body)).await
    }

    /// Send a request and discard the response body.
    pub(crate) async fn call_no_content(&self, builder: RequestBuilder) -> Result<()> {
        self.http.send(builder).await?;
        Ok(())
    }
}

/// Decode a response body, mapping mismatches to [`TabsyncError::Decode`].
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|err| TabsyncError::Decode(err.to_string()))
}

#[async_trait]
impl MembershipDirectory for RestClient {
    async fn list_members(&self, group_id: &str) -> Result<Vec<String>> {
        self.list_group_members(group_id).await
    }

    async fn add_member(&self, group_id: &str, email: &str) -> Result<()> {
        self.add_group_member(group_id, email).await
    }

    async fn remove_member(&self, group_id: &str, email: &str) -> Result<()> {
        self.remove_group_member(group_id, email).await
    }
}
