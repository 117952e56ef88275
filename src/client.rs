use crate::error::{Result, TwitchError};
use reqwest::{Client, ClientBuilder};
use std::path::PathBuf;
use std::time::Duration;

/// Default Helix REST base URL
pub const HELIX_BASE: &str = "https://api.twitch.tv/helix";

/// Default OAuth2 base URL (token issuance and validation)
pub const OAUTH_BASE: &str = "https://id.twitch.tv/oauth2";

/// Default location of the persisted token file
pub const DEFAULT_TOKEN_PATH: &str = "token.json";

/// Twitch asks apps to validate their tokens once an hour
pub const DEFAULT_VALIDATION_INTERVAL: Duration = Duration::from_secs(3600);

/// Create the HTTP client for API requests
/// with connection pooling and the configured timeouts
pub fn create_rest_client(config: &Config) -> Result<Client> {
    ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(TwitchError::from)
}

/// Configuration for the Twitch API client
#[derive(Clone)]
pub struct Config {
    /// Application client id
    pub client_id: String,
    /// Application client secret
    pub client_secret: String,
    /// Where the app access token is persisted
    pub token_path: PathBuf,
    /// Helix base URL
    pub api_base: String,
    /// OAuth2 base URL
    pub auth_base: String,
    /// Period of the background token validation
    pub validation_interval: Duration,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with the given application credentials
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            api_base: HELIX_BASE.to_string(),
            auth_base: OAUTH_BASE.to_string(),
            validation_interval: DEFAULT_VALIDATION_INTERVAL,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Build a configuration from `TWITCH_CLIENT_ID`, `TWITCH_CLIENT_SECRET`
    /// and the optional `TWITCH_TOKEN_PATH`.
    pub fn from_env() -> Result<Self> {
        let client_id =
            std::env::var("TWITCH_CLIENT_ID").map_err(|_| TwitchError::MissingEnv("TWITCH_CLIENT_ID"))?;
        let client_secret = std::env::var("TWITCH_CLIENT_SECRET")
            .map_err(|_| TwitchError::MissingEnv("TWITCH_CLIENT_SECRET"))?;

        let mut config = Config::new(client_id, client_secret);
        if let Ok(path) = std::env::var("TWITCH_TOKEN_PATH") {
            config.token_path = PathBuf::from(path);
        }
        Ok(config)
    }

    /// Set the token file path
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = path.into();
        self
    }

    /// Override the Helix base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Override the OAuth2 base URL
    pub fn with_auth_base(mut self, base: impl Into<String>) -> Self {
        self.auth_base = base.into();
        self
    }

    /// Set the background validation period
    pub fn with_validation_interval(mut self, interval: Duration) -> Self {
        self.validation_interval = interval;
        self
    }

    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of a Helix endpoint, e.g. `api_url("streams")`
    pub fn api_url(&self, endpoint: &str) -> String {
        join_url(&self.api_base, endpoint)
    }

    /// Full URL of an OAuth2 endpoint, e.g. `auth_url("token")`
    pub fn auth_url(&self, endpoint: &str) -> String {
        join_url(&self.auth_base, endpoint)
    }
}

fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

// Keep the client secret out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_path", &self.token_path)
            .field("api_base", &self.api_base)
            .field("auth_base", &self.auth_base)
            .field("validation_interval", &self.validation_interval)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
