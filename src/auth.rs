//! App access token lifecycle.
//!
//! Handles token issuance with the client-credentials grant, expiry checks,
//! persistence through a [`TokenStore`], validation against the OAuth2
//! validate endpoint and the hourly background validation task.

use crate::client::Config;
use crate::error::{Result, TwitchError};
use crate::store::TokenStore;
use crate::token::Token;
use crate::transport::{HttpRequest, HttpTransport};
use chrono::Utc;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use url::Url;

/// Refreshes allowed when validation answers 401
const MAX_VALIDATION_RETRIES: usize = 1;

/// Body of a successful token request.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Payload of the OAuth2 validate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValidation {
    pub client_id: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub scopes: Option<Vec<String>>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub expires_in: i64,
}

/// Owns the app access token.
///
/// All token mutation goes through [`TokenManager::generate`] (and the
/// operations built on it); nothing else writes the in-memory token or the
/// store.
pub struct TokenManager {
    config: Config,
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn TokenStore>,
    /// `None` until the store has been read
    token: RwLock<Option<Token>>,
    validation_task: Mutex<Option<JoinHandle<()>>>,
}

impl TokenManager {
    /// Create a manager. The persisted token is read from `store` on first use.
    pub fn new(config: Config, transport: Arc<dyn HttpTransport>, store: Arc<dyn TokenStore>) -> Self {
        TokenManager {
            config,
            transport,
            store,
            token: RwLock::new(None),
            validation_task: Mutex::new(None),
        }
    }

    /// Snapshot of the current token
    pub async fn token(&self) -> Token {
        if let Some(token) = self.token.read().await.as_ref() {
            return token.clone();
        }

        let mut slot = self.token.write().await;
        if let Some(token) = slot.as_ref() {
            return token.clone();
        }

        // An unreadable store counts as "no token yet"
        let token = match self.store.load().await {
            Ok(token) => token.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored token unreadable, starting without one");
                Token::default()
            }
        };
        *slot = Some(token.clone());
        token
    }

    /// True if there is no usable token
    pub async fn is_expired(&self) -> bool {
        self.token().await.is_expired()
    }

    /// Request a new app access token, persist it and make it current.
    ///
    /// On failure neither the store nor the in-memory token is touched.
    pub async fn generate(&self) -> Result<Token> {
        let mut url = Url::parse(&self.config.auth_url("token"))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("client_secret", &self.config.client_secret)
            .append_pair("grant_type", "client_credentials");

        let response = self.transport.send(HttpRequest::new(Method::POST, url)).await?;
        if !response.is_success() {
            return Err(TwitchError::status(response.status, response.status_text));
        }

        let issued: TokenResponse = response.json()?;
        let token = Token {
            created_at: Utc::now().timestamp_millis(),
            access_token: issued.access_token,
            expires_in: issued.expires_in,
            token_type: "Bearer".to_string(),
        };

        self.store.save(&token).await?;
        *self.token.write().await = Some(token.clone());

        Ok(token)
    }

    /// Replace the current token with a freshly generated one
    pub async fn refresh(&self) -> Result<Token> {
        tracing::info!("Refreshing Twitch app access token");
        let token = self.generate().await?;
        tracing::debug!(expires_in = token.expires_in, "Twitch app access token refreshed");
        Ok(token)
    }

    /// Refresh inline if the current token is expired, then return it
    pub async fn ensure_valid(&self) -> Result<Token> {
        let token = self.token().await;
        if token.is_expired() {
            return self.refresh().await;
        }
        Ok(token)
    }

    /// Validate the current token against the OAuth2 validate endpoint.
    ///
    /// A 401 triggers one refresh and a second validation; if that is
    /// rejected too, the 401 is returned.
    pub async fn validate(&self) -> Result<TokenValidation> {
        let mut retries = 0;
        loop {
            let mut token = self.token().await;
            if !token.has_access_token() {
                token = self.refresh().await?;
            }

            let url = Url::parse(&self.config.auth_url("validate"))?;
            let mut request = HttpRequest::new(Method::GET, url);
            request.headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token.access_token))?,
            );

            let response = self.transport.send(request).await?;
            if response.status == 401 && retries < MAX_VALIDATION_RETRIES {
                tracing::warn!("Token rejected by validation, refreshing");
                retries += 1;
                self.refresh().await?;
                continue;
            }
            if !response.is_success() {
                return Err(TwitchError::status(response.status, response.status_text));
            }

            return response.json();
        }
    }

    /// Start (or restart) the background validation task.
    ///
    /// The first validation runs one interval after the call. The task holds
    /// only a weak reference, so it ends on its own once the manager is gone.
    pub fn start_periodic_validation(self: &Arc<Self>) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("No tokio runtime, periodic token validation not started");
                return;
            }
        };

        let period = self.config.validation_interval;
        let manager: Weak<Self> = Arc::downgrade(self);
        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(strong) = manager.upgrade() else {
                    break;
                };
                if let Err(e) = strong.validate().await {
                    tracing::warn!(error = %e, "Token validation failed");
                }
            }
        });

        let previous = self.lock_task().replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
        tracing::info!(?period, "Periodic token validation started");
    }

    /// Stop the background validation task, if running
    pub fn stop_periodic_validation(&self) {
        if let Some(task) = self.lock_task().take() {
            task.abort();
            tracing::info!("Periodic token validation stopped");
        }
    }

    /// Whether a background validation task is running
    pub fn is_validating_periodically(&self) -> bool {
        self.lock_task()
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// Startup sequence: refresh if expired, validate, then start the
    /// background validation (started even if validation failed).
    pub async fn initialize(self: &Arc<Self>) -> Result<TokenValidation> {
        let result = self.initial_validation().await;
        self.start_periodic_validation();
        result
    }

    async fn initial_validation(&self) -> Result<TokenValidation> {
        if self.is_expired().await {
            self.refresh().await?;
        }
        self.validate().await
    }

    fn lock_task(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.validation_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for TokenManager {
    fn drop(&mut self) {
        if let Some(task) = self.lock_task().take() {
            task.abort();
        }
    }
}
