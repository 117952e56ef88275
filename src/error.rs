use thiserror::Error;

/// Main error type for Twitch API operations
#[derive(Debug, Error)]
pub enum TwitchError {
    /// HTTP client error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response; only the status text is kept, never the body
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// A name lookup (user or game) matched nothing
    #[error("{0}")]
    NotFound(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Header value contains characters HTTP does not allow
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// IO error (token file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable is not set
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}

impl TwitchError {
    /// Create a status error
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        TwitchError::Status {
            status,
            status_text: status_text.into(),
        }
    }

    /// Get the HTTP status code if the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TwitchError::Status { status, .. } => Some(*status),
            TwitchError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Status text of a non-2xx response
    pub fn status_text(&self) -> Option<&str> {
        match self {
            TwitchError::Status { status_text, .. } => Some(status_text),
            _ => None,
        }
    }

    /// Check if this error is a 401
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Check if this error is a not found error (404 or an empty lookup)
    pub fn is_not_found(&self) -> bool {
        matches!(self, TwitchError::NotFound(_)) || self.status_code() == Some(404)
    }
}

/// Result type for Twitch API operations
pub type Result<T> = std::result::Result<T, TwitchError>;
