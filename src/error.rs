//! Error types for Jama Connect API operations.

use thiserror::Error;

/// Errors that can occur during Jama Connect API operations.
///
/// HTTP error responses are mapped onto dedicated variants by the status
/// interpreter in [`crate::JamaClient`]; the dispatch order is fixed: an
/// "already exists" message wins over the status-code checks, then 401,
/// 404, 429, and finally the generic client/server variants.
#[derive(Debug, Error)]
pub enum JamaError {
    /// Configuration is missing or incomplete.
    #[error("Jama configuration required: {0}")]
    ConfigMissing(String),

    /// The OAuth token endpoint was unreachable or rejected the client
    /// credentials. Distinct from [`JamaError::Unauthorized`], which is a
    /// 401 on a resource call.
    #[error("unable to fetch OAuth token: {0}")]
    TokenUnauthorized(String),

    /// The API reported that the entity being created already exists.
    #[error("entity already exists: {reason}")]
    AlreadyExists { status_code: u16, reason: String },

    /// 401 on a resource call: check credentials and permissions.
    #[error("unauthorized, check credentials and permissions: {reason}")]
    Unauthorized { status_code: u16, reason: String },

    /// 404: the resource does not exist, or the host URL is wrong.
    #[error("resource not found, check host url: {reason}")]
    NotFound { status_code: u16, reason: String },

    /// 429: API throttling limit reached, or system under maintenance.
    #[error("too many requests, throttling limit reached or system under maintenance: {reason}")]
    TooManyRequests { status_code: u16, reason: String },

    /// Any other 4xx response.
    #[error("{status_code} client error, bad request: {reason}")]
    ClientError { status_code: u16, reason: String },

    /// Any 5xx response.
    #[error("{status_code} server error: {reason}")]
    ServerError { status_code: u16, reason: String },

    /// A status outside the conventional 2xx/4xx/5xx ranges.
    #[error("{status_code} error: {reason}")]
    Api { status_code: u16, reason: String },

    /// Results-per-page outside the allowed `[1, 50]` range. Raised before
    /// any network call is made.
    #[error("allowed results per page must be between 1 and 50, got {0}")]
    InvalidPageSize(u32),

    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl JamaError {
    /// The HTTP status code behind this error, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::AlreadyExists { status_code, .. }
            | Self::Unauthorized { status_code, .. }
            | Self::NotFound { status_code, .. }
            | Self::TooManyRequests { status_code, .. }
            | Self::ClientError { status_code, .. }
            | Self::ServerError { status_code, .. }
            | Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// The server-supplied reason or message, when one exists.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::AlreadyExists { reason, .. }
            | Self::Unauthorized { reason, .. }
            | Self::NotFound { reason, .. }
            | Self::TooManyRequests { reason, .. }
            | Self::ClientError { reason, .. }
            | Self::ServerError { reason, .. }
            | Self::Api { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Result type alias for Jama operations.
pub type Result<T> = core::result::Result<T, JamaError>;
