use crate::auth::{TokenManager, TokenValidation};
use crate::client::{create_rest_client, Config};
use crate::error::{Result, TwitchError};
use crate::response::{HelixResponse, Response};
use crate::store::{FileTokenStore, TokenStore};
use crate::token::Token;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Helix accepts at most this many values for a repeated filter
pub const MAX_FILTER_VALUES: usize = 100;

/// Query parameters of a Helix request.
///
/// Only pushed parameters are emitted; repeated keys (`user_id=1&user_id=2`)
/// are how Helix takes lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parameter
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only if a value was supplied
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Add a repeated parameter, keeping at most [`MAX_FILTER_VALUES`] values
    pub fn push_all<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for value in values.into_iter().take(MAX_FILTER_VALUES) {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Append the parameters to `url`, percent-encoded
    pub fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(
            self.pairs
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
    }
}

/// Twitch API client.
///
/// Owns the token manager and the transport; every resource method goes
/// through [`TwitchClient::request`].
pub struct TwitchClient {
    /// Configuration
    pub config: Config,
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) tokens: Arc<TokenManager>,
}

impl TwitchClient {
    /// Create a client with the default configuration for these credentials.
    ///
    /// The token is persisted to `token.json` in the working directory.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(client_id, client_secret))
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(create_rest_client(&config)?));
        let store = Arc::new(FileTokenStore::new(config.token_path.clone()));
        Ok(Self::with_parts(config, transport, store))
    }

    /// Create a client from explicit parts (custom transport or token storage)
    pub fn with_parts(
        config: Config,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        let tokens = Arc::new(TokenManager::new(
            config.clone(),
            transport.clone(),
            store,
        ));
        TwitchClient {
            config,
            transport,
            tokens,
        }
    }

    /// The token manager backing this client
    pub fn token_manager(&self) -> &Arc<TokenManager> {
        &self.tokens
    }

    /// Startup sequence: refresh the token if expired, validate it and start
    /// the hourly background validation. Call once before using the client.
    pub async fn initialize(&self) -> Response<TokenValidation> {
        Response::from_result(self.tokens.initialize().await)
    }

    /// Request a new app access token
    pub async fn generate_token(&self) -> Response<Token> {
        Response::from_result(self.tokens.generate().await)
    }

    /// Replace the current token with a new one
    pub async fn refresh_token(&self) -> Response<Token> {
        Response::from_result(self.tokens.refresh().await)
    }

    /// Validate the current token
    pub async fn validate_token(&self) -> Response<TokenValidation> {
        Response::from_result(self.tokens.validate().await)
    }

    /// True if there is no usable token
    pub async fn is_expired_token(&self) -> bool {
        self.tokens.is_expired().await
    }

    /// Start (or restart) the hourly background validation
    pub fn start_periodic_validation(&self) {
        self.tokens.start_periodic_validation();
    }

    /// Stop the background validation
    pub fn stop_periodic_validation(&self) {
        self.tokens.stop_periodic_validation();
    }

    /// Stop background work. The client stays usable for direct calls.
    pub fn shutdown(&self) {
        self.stop_periodic_validation();
    }

    /// Make a Helix request and unmarshal its `data` into the target type.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Helix endpoint path, e.g. `"streams"`
    /// * `query` - Query parameters
    pub async fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        query: &Query,
    ) -> Result<HelixResponse<T>>
    where
        T: DeserializeOwned,
    {
        let token = self.tokens.ensure_valid().await?;

        let mut url = Url::parse(&self.config.api_url(endpoint))?;
        query.apply_to(&mut url);

        let mut request = HttpRequest::new(method.clone(), url);
        request
            .headers
            .insert(AUTHORIZATION, HeaderValue::from_str(&token.authorization())?);
        request
            .headers
            .insert("Client-Id", HeaderValue::from_str(&self.config.client_id)?);

        let start = std::time::Instant::now();
        let response = self.transport.send(request).await?;
        tracing::debug!(
            %method,
            endpoint,
            status = response.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "helix request"
        );

        if !response.is_success() {
            return Err(TwitchError::status(response.status, response.status_text));
        }

        response.json()
    }

    /// GET shorthand for [`TwitchClient::request`]
    pub async fn get<T>(&self, endpoint: &str, query: &Query) -> Result<HelixResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, endpoint, query).await
    }
}

impl Drop for TwitchClient {
    fn drop(&mut self) {
        self.tokens.stop_periodic_validation();
    }
}
