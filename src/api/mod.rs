//! Helix resource methods.
//!
//! Each submodule adds an `impl TwitchClient` block for one resource family.
//! Public methods return a [`Response`](crate::Response) envelope and never
//! fail; the private helpers they wrap return `Result` so lookups compose
//! with `?`.

mod bits;
mod chat;
mod clips;
mod games;
pub mod models;
pub mod params;
mod streams;
mod users;
mod videos;

pub use models::*;
pub use params::*;

use crate::error::{Result, TwitchError};
use crate::response::HelixResponse;
use crate::rest::TwitchClient;

impl TwitchClient {
    /// Resolve a login to its user id
    pub(crate) async fn resolve_user_id(&self, login: &str) -> Result<String> {
        self.users(&[login])
            .await?
            .data
            .into_iter()
            .next()
            .map(|user| user.id)
            .ok_or_else(|| TwitchError::NotFound(format!("user not found: {login}")))
    }

    /// Resolve a category or game name to its id
    pub(crate) async fn resolve_game_id(&self, name: &str) -> Result<String> {
        self.games(&[name])
            .await?
            .data
            .into_iter()
            .next()
            .map(|game| game.id)
            .ok_or_else(|| TwitchError::NotFound(format!("game not found: {name}")))
    }
}

fn empty_page<T>() -> HelixResponse<Vec<T>> {
    HelixResponse::from_data(Vec::new())
}
