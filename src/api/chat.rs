use super::models::{BadgeSet, ChatSettings, Emote};
use crate::error::Result;
use crate::response::{HelixResponse, Response};
use crate::rest::{Query, TwitchClient};
use serde::de::DeserializeOwned;

impl TwitchClient {
    /// Get chat emotes.
    ///
    /// With a broadcaster login, returns that channel's custom emotes;
    /// without one, the global emotes.
    pub async fn get_chat_emotes(&self, broadcaster: Option<&str>) -> Response<Vec<Emote>> {
        Response::from_page(
            self.global_or_channel("chat/emotes/global", "chat/emotes", broadcaster)
                .await,
        )
    }

    /// Get chat badges.
    ///
    /// With a broadcaster login, returns that channel's custom badges;
    /// without one, the global badges.
    pub async fn get_chat_badges(&self, broadcaster: Option<&str>) -> Response<Vec<BadgeSet>> {
        Response::from_page(
            self.global_or_channel("chat/badges/global", "chat/badges", broadcaster)
                .await,
        )
    }

    /// Get the chat settings of a broadcaster
    pub async fn get_chat_settings(&self, broadcaster: &str) -> Response<Vec<ChatSettings>> {
        Response::from_page(self.chat_settings(broadcaster).await)
    }

    async fn global_or_channel<T: DeserializeOwned>(
        &self,
        global: &str,
        channel: &str,
        broadcaster: Option<&str>,
    ) -> Result<HelixResponse<T>> {
        match broadcaster {
            None => self.get(global, &Query::new()).await,
            Some(login) => {
                let broadcaster_id = self.resolve_user_id(login).await?;
                let mut query = Query::new();
                query.push("broadcaster_id", broadcaster_id);
                self.get(channel, &query).await
            }
        }
    }

    async fn chat_settings(&self, broadcaster: &str) -> Result<HelixResponse<Vec<ChatSettings>>> {
        let broadcaster_id = self.resolve_user_id(broadcaster).await?;
        let mut query = Query::new();
        query.push("broadcaster_id", broadcaster_id);
        self.get("chat/settings", &query).await
    }
}
