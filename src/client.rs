//! Jama Connect API client.
//!
//! Low-level HTTP client that handles authentication, status checking,
//! and transparent pagination. The per-resource operations live in
//! [`crate::apis`] and delegate here.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::auth::{Authenticator, Credentials};
use crate::error::{JamaError, Result};
use crate::response::Envelope;

const DEFAULT_API_VERSION: &str = "/rest/v1/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("jamapi/", env!("CARGO_PKG_VERSION"));

/// Default number of results requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Sentinel used when an error body carries no parsable message.
const NO_RESPONSE: &str = "No Response";

/// Low-level Jama Connect API client.
///
/// Owns the HTTP connection pool, the base URL (`host` + API version
/// prefix), and the credential state, including the cached OAuth bearer
/// token. Cheaply cloneable; clones share the pool and the token cache.
///
/// # Example
///
/// ```no_run
/// use jamapi::{Credentials, JamaClient};
///
/// # async fn example() -> jamapi::Result<()> {
/// let client = JamaClient::builder("https://example.jamacloud.com")
///     .credentials(Credentials::Basic {
///         username: "user".into(),
///         password: "pass".into(),
///     })
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JamaClient {
    http: Client,
    base_url: Arc<Url>,
    auth: Arc<Authenticator>,
}

impl std::fmt::Debug for JamaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JamaClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl JamaClient {
    /// Start building a client for the given host.
    pub fn builder(host: &str) -> JamaClientBuilder {
        JamaClientBuilder::new(host)
    }

    /// Create a client with default settings for the given host.
    pub async fn new(host: &str, credentials: Credentials) -> Result<Self> {
        Self::builder(host).credentials(credentials).build().await
    }

    /// Create a client from environment variables.
    ///
    /// Reads `JAMA_HOST`, plus either `JAMA_CLIENT_ID`/`JAMA_CLIENT_SECRET`
    /// (OAuth mode, preferred when both are present) or
    /// `JAMA_USERNAME`/`JAMA_PASSWORD` (basic auth).
    pub async fn from_env() -> Result<Self> {
        let host = env::var("JAMA_HOST").map_err(|_| {
            JamaError::ConfigMissing("JAMA_HOST environment variable not set".to_string())
        })?;

        let credentials = match (env::var("JAMA_CLIENT_ID"), env::var("JAMA_CLIENT_SECRET")) {
            (Ok(client_id), Ok(client_secret)) => Credentials::ClientCredentials {
                client_id,
                client_secret,
            },
            _ => match (env::var("JAMA_USERNAME"), env::var("JAMA_PASSWORD")) {
                (Ok(username), Ok(password)) => Credentials::Basic { username, password },
                _ => {
                    return Err(JamaError::ConfigMissing(
                        "set JAMA_CLIENT_ID/JAMA_CLIENT_SECRET or JAMA_USERNAME/JAMA_PASSWORD"
                            .to_string(),
                    ))
                }
            },
        };

        Self::new(&host, credentials).await
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request against a resource-relative path.
    #[tracing::instrument(skip(self, params))]
    pub async fn get(&self, resource: &str, params: &[(String, String)]) -> Result<Response> {
        let url = self.base_url.join(resource)?;
        let request = self.http.get(url).query(params);
        let request = self.auth.apply(request, &self.http).await?;
        let response = request.send().await.map_err(JamaError::Http)?;
        Self::check_response(response).await
    }

    /// Make a POST request with an optional JSON body.
    #[tracing::instrument(skip(self, params, body))]
    pub async fn post(
        &self,
        resource: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = self.base_url.join(resource)?;
        let mut request = self.http.post(url).query(params);
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.auth.apply(request, &self.http).await?;
        let response = request.send().await.map_err(JamaError::Http)?;
        Self::check_response(response).await
    }

    /// Make a PUT request with an optional JSON body.
    #[tracing::instrument(skip(self, params, body))]
    pub async fn put(
        &self,
        resource: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = self.base_url.join(resource)?;
        let mut request = self.http.put(url).query(params);
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.auth.apply(request, &self.http).await?;
        let response = request.send().await.map_err(JamaError::Http)?;
        Self::check_response(response).await
    }

    /// Make a PUT request with a multipart form body (file uploads).
    #[tracing::instrument(skip(self, params, form))]
    pub async fn put_multipart(
        &self,
        resource: &str,
        params: &[(String, String)],
        form: Form,
    ) -> Result<Response> {
        let url = self.base_url.join(resource)?;
        let request = self.http.put(url).query(params).multipart(form);
        let request = self.auth.apply(request, &self.http).await?;
        let response = request.send().await.map_err(JamaError::Http)?;
        Self::check_response(response).await
    }

    /// Make a PATCH request with a JSON body.
    #[tracing::instrument(skip(self, params, body))]
    pub async fn patch(
        &self,
        resource: &str,
        params: &[(String, String)],
        body: &Value,
    ) -> Result<Response> {
        let url = self.base_url.join(resource)?;
        let request = self.http.patch(url).query(params).json(body);
        let request = self.auth.apply(request, &self.http).await?;
        let response = request.send().await.map_err(JamaError::Http)?;
        Self::check_response(response).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, resource: &str) -> Result<Response> {
        let url = self.base_url.join(resource)?;
        let request = self.http.delete(url);
        let request = self.auth.apply(request, &self.http).await?;
        let response = request.send().await.map_err(JamaError::Http)?;
        Self::check_response(response).await
    }

    /// Fetch one page of a collection resource.
    ///
    /// The pagination pair (`startAt`, `maxResults`) is merged into the
    /// caller's params and wins on key collision.
    pub async fn get_page(
        &self,
        resource: &str,
        params: &[(String, String)],
        start_at: u64,
        page_size: u32,
    ) -> Result<Envelope> {
        let query = page_params(params, start_at, page_size);
        let response = self.get(resource, &query).await?;
        Envelope::from_response(response).await
    }

    /// Fetch every page of a collection resource and merge the pages
    /// into one envelope.
    ///
    /// `page_size` must be in `[1, 50]`; anything else fails with
    /// [`JamaError::InvalidPageSize`] before any request is issued. At
    /// least one page is always fetched, so an empty collection still
    /// costs one round trip. The server-reported `totalResults` is
    /// re-read on every page and decides termination; the cursor always
    /// advances by the configured page size from the reported
    /// `startIndex`, not by the count actually returned.
    ///
    /// A failure on any page discards everything accumulated so far.
    #[tracing::instrument(skip(self, params))]
    pub async fn get_all(
        &self,
        resource: &str,
        params: &[(String, String)],
        page_size: u32,
    ) -> Result<Envelope> {
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(JamaError::InvalidPageSize(page_size));
        }

        let mut accumulated = Envelope::default();
        let mut start_at: u64 = 0;

        loop {
            let page = self.get_page(resource, params, start_at, page_size).await?;
            let page_info = page.page_info();
            accumulated = accumulated.combine(page);

            match page_info {
                Some(info) => {
                    start_at = info.start_index + u64::from(page_size);
                    if accumulated.data_len() as u64 >= info.total_results {
                        break;
                    }
                }
                // Not a paged response; nothing more to fetch.
                None => break,
            }
        }

        Ok(accumulated)
    }

    /// Check the response status, mapping failures onto the typed error
    /// taxonomy. Success returns the response untouched.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            code @ 400..=499 => {
                let message = Self::extract_client_message(response).await;
                tracing::error!(status = code, message = %message, "API client error");
                Err(Self::client_error(code, message))
            }
            code @ 500..=599 => {
                let reason = reason_phrase(status);
                tracing::error!(status = code, reason = %reason, "API server error");
                Err(JamaError::ServerError {
                    status_code: code,
                    reason,
                })
            }
            code => {
                let reason = reason_phrase(status);
                tracing::error!(status = code, reason = %reason, "unexpected API status");
                Err(JamaError::Api {
                    status_code: code,
                    reason,
                })
            }
        }
    }

    /// Dispatch a 4xx status and message in fixed priority order. The
    /// message-content check runs first so an "already exists" body wins
    /// regardless of the status code it arrived with.
    fn client_error(status_code: u16, reason: String) -> JamaError {
        if reason.contains("already exists") {
            return JamaError::AlreadyExists {
                status_code,
                reason,
            };
        }
        match status_code {
            401 => JamaError::Unauthorized {
                status_code,
                reason,
            },
            404 => JamaError::NotFound {
                status_code,
                reason,
            },
            429 => JamaError::TooManyRequests {
                status_code,
                reason,
            },
            _ => JamaError::ClientError {
                status_code,
                reason,
            },
        }
    }

    /// Pull `meta.message` out of a failed response body.
    async fn extract_client_message(response: Response) -> String {
        let body = match response.text().await {
            Ok(body) => body,
            Err(_) => return NO_RESPONSE.to_string(),
        };

        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|json| {
                json.get("meta")
                    .and_then(|meta| meta.get("message"))
                    .and_then(|message| message.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| NO_RESPONSE.to_string())
    }
}

/// Merge the pagination pair into caller-supplied params. Caller copies
/// of `startAt`/`maxResults` are dropped: the pagination contract is
/// non-negotiable.
fn page_params(params: &[(String, String)], start_at: u64, page_size: u32) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = params
        .iter()
        .filter(|(key, _)| key != "startAt" && key != "maxResults")
        .cloned()
        .collect();
    query.push(("startAt".to_string(), start_at.to_string()));
    query.push(("maxResults".to_string(), page_size.to_string()));
    query
}

fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string()
}

/// Configures and constructs a [`JamaClient`].
pub struct JamaClientBuilder {
    host: String,
    credentials: Option<Credentials>,
    api_version: String,
    timeout: Duration,
    danger_accept_invalid_certs: bool,
    root_certificates: Vec<reqwest::Certificate>,
}

impl JamaClientBuilder {
    fn new(host: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            credentials: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            danger_accept_invalid_certs: false,
            root_certificates: Vec::new(),
        }
    }

    /// Set the credentials; the variant selects the auth mode.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the API version path segment (default `/rest/v1/`).
    pub fn api_version(mut self, api_version: &str) -> Self {
        let trimmed = api_version.trim_matches('/');
        self.api_version = format!("/{trimmed}/");
        self
    }

    /// Override the connect/read timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disable TLS certificate verification.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Trust an additional CA certificate.
    pub fn add_root_certificate(mut self, certificate: reqwest::Certificate) -> Self {
        self.root_certificates.push(certificate);
        self
    }

    /// Build the client. In OAuth mode the first bearer token is acquired
    /// here; construction fails if the token endpoint rejects.
    pub async fn build(self) -> Result<JamaClient> {
        let credentials = self.credentials.ok_or_else(|| {
            JamaError::ConfigMissing("credentials are required to build a client".to_string())
        })?;

        let host_url = Url::parse(&self.host)?;
        let base_url = Url::parse(&format!("{}{}", self.host, self.api_version))?;

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);
        for certificate in self.root_certificates {
            builder = builder.add_root_certificate(certificate);
        }
        let http = builder.build().map_err(JamaError::Http)?;

        let auth = Authenticator::new(credentials, &host_url)?;
        auth.prime(&http).await?;

        Ok(JamaClient {
            http,
            base_url: Arc::new(base_url),
            auth: Arc::new(auth),
        })
    }
}
