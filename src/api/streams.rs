use super::empty_page;
use super::models::Stream;
use super::params::{StreamType, StreamsParams};
use crate::error::Result;
use crate::response::{HelixResponse, Response};
use crate::rest::{Query, TwitchClient};

impl TwitchClient {
    /// Get live streams, most viewers first.
    ///
    /// Game names and user logins are resolved to ids before the request.
    /// If a name filter was given but none of the names exist, the result is
    /// empty rather than unfiltered.
    pub async fn get_streams(&self, params: StreamsParams) -> Response<Vec<Stream>> {
        Response::from_page(self.streams(&params).await)
    }

    async fn streams(&self, params: &StreamsParams) -> Result<HelixResponse<Vec<Stream>>> {
        let mut query = Query::new();
        params.page.apply(&mut query);

        if !params.game_names.is_empty() {
            let games = self.games(&params.game_names).await?;
            if games.data.is_empty() {
                return Ok(empty_page());
            }
            query.push_all("game_id", games.data.iter().map(|g| g.id.as_str()));
        }

        query
            .push_all("language", &params.languages)
            .push_opt("type", params.stream_type.as_ref().map(StreamType::as_str));

        if !params.user_logins.is_empty() {
            let users = self.users(&params.user_logins).await?;
            if users.data.is_empty() {
                return Ok(empty_page());
            }
            query.push_all("user_id", users.data.iter().map(|u| u.id.as_str()));
        }

        self.get("streams", &query).await
    }
}
