use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use tabsync_domain::{Result, TabsyncError};
use tracing::{debug, warn};

/// Status codes the Tableau REST API returns on success.
const SUCCESS_STATUSES: [u16; 3] = [200, 201, 204];

/// HTTP client with built-in retry and timeout support.
///
/// The retry policy is deliberately blunt: every failed attempt is retried,
/// whether it was a connection error or a non-success status of any class,
/// with a fixed delay between attempts. This mirrors the remote API's
/// client conventions; narrowing to transient classes would change observed
/// behaviour.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    retry_delay: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder with retry semantics and return
    /// the raw response body on success.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let attempts = self.max_attempts.max(1);
        let mut last_failure: Option<TabsyncError> = None;

        for attempt in 1..=attempts {
            if attempt > 1 {
                if let Some(failure) = &last_failure {
                    warn!(attempt, error = %failure, "retrying HTTP request");
                }
                if !self.retry_delay.is_zero() {
                    tokio::time::sleep(self.retry_delay).await;
                }
            }

            let cloned_builder = builder.try_clone().ok_or_else(|| {
                TabsyncError::Transport(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;

            let request = cloned_builder
                .build()
                .map_err(|err| TabsyncError::Transport(err.to_string()))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, %url, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if SUCCESS_STATUSES.contains(&status.as_u16()) {
                        let bytes = response
                            .bytes()
                            .await
                            .map_err(|err| TabsyncError::Transport(err.to_string()))?;
                        return Ok(bytes.to_vec());
                    }

                    let body = response.text().await.unwrap_or_default();
                    last_failure = Some(TabsyncError::RemoteStatus {
                        status: status.as_u16(),
                        body,
                    });
                }
                Err(err) => {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");
                    last_failure = Some(TabsyncError::Transport(err.to_string()));
                }
            }
        }

        Err(last_failure.unwrap_or_else(|| {
            TabsyncError::Transport(
                "http client exhausted retries without producing a result".into(),
            )
        }))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    retry_delay: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_attempts: 3,
            retry_delay: Duration::from_secs(5),
            user_agent: None,
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    /// Per-call timeout covering connect and response.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Fixed delay between attempts. No growth, no jitter.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client =
            builder.build().map_err(|err| TabsyncError::Transport(err.to_string()))?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            retry_delay: self.retry_delay,
        })
    }
}
