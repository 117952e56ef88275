use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Token represents an OAuth2 app access token obtained with the
/// client-credentials grant, as persisted in the token file.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Creation time, milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,

    /// Access token for API requests
    #[serde(default)]
    pub access_token: String,

    /// Lifetime in seconds, counted from `created_at`
    #[serde(default)]
    pub expires_in: i64,

    /// Token type, always "Bearer" once stamped
    #[serde(default)]
    pub token_type: String,
}

impl Token {
    /// Create a new Token created now
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Token {
            created_at: Utc::now().timestamp_millis(),
            access_token,
            expires_in,
            token_type: "Bearer".to_string(),
        }
    }

    /// Check if we have an access token at all
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Expiration time in milliseconds since the Unix epoch
    pub fn expires_at(&self) -> i64 {
        self.created_at
            .saturating_add(self.expires_in.saturating_mul(1000))
    }

    /// Whether the token is unusable at `now_ms`.
    ///
    /// A token without an access token is always expired; otherwise it
    /// expires at exactly `created_at + expires_in` seconds.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        if !self.has_access_token() {
            return true;
        }
        now_ms >= self.expires_at()
    }

    /// Whether the token is unusable right now
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    /// Value of the Authorization header
    pub fn authorization(&self) -> String {
        let token_type = if self.token_type.is_empty() {
            "Bearer"
        } else {
            &self.token_type
        };
        format!("{} {}", token_type, self.access_token)
    }
}

// Keep the access token out of logs
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("created_at", &self.created_at)
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}
