//! # twitchapi - Twitch Helix client for Rust
//!
//! An async client for the Twitch Helix API using an app access token.
//! It takes care of the OAuth2 client-credentials flow, keeps the token on
//! disk between runs, validates it hourly and refreshes it when Twitch
//! rejects it.
//!
//! ## Features
//!
//! - App access token lifecycle:
//!   - Generated on demand and persisted to a JSON file
//!   - Refreshed before a request if it has expired
//!   - Validated once at startup and every hour in the background
//! - Typed Helix resources: streams, users, games, clips, videos, chat
//!   emotes, badges, settings and colors, cheermotes
//! - Login and game names resolved to ids automatically
//! - Every call returns a [`Response`] envelope instead of failing
//!
//! ## Basic Usage
//!
//! ```no_run
//! use twitchapi::{StreamsParams, TwitchClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TwitchClient::new("client_id", "client_secret")?;
//!
//!     let validation = client.initialize().await;
//!     if !validation.ok {
//!         eprintln!("token validation failed: {:?}", validation.message());
//!     }
//!
//!     let streams = client
//!         .get_streams(StreamsParams::new().user_logins(["twitchdev"]))
//!         .await;
//!     for stream in streams.result().into_iter().flatten() {
//!         println!("{} is live with {} viewers", stream.user_name, stream.viewer_count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use twitchapi::{Config, TwitchClient};
//!
//! // TWITCH_CLIENT_ID, TWITCH_CLIENT_SECRET and optionally TWITCH_TOKEN_PATH
//! let config = Config::from_env()?
//!     .with_token_path("/var/lib/bot/twitch-token.json")
//!     .with_validation_interval(Duration::from_secs(1800));
//!
//! let client = TwitchClient::with_config(config)?;
//! # Ok::<(), twitchapi::TwitchError>(())
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod response;
pub mod rest;
pub mod store;
pub mod token;
pub mod transport;

// Re-export main types for convenience
pub use api::{
    ClipsParams, PageParams, StreamType, StreamsParams, VideoPeriod, VideoSort, VideoType,
    VideosParams,
};
pub use auth::{TokenManager, TokenValidation};
pub use client::Config;
pub use error::{Result, TwitchError};
pub use response::{HelixResponse, Pagination, Response};
pub use rest::{Query, TwitchClient};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use token::Token;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
