use super::models::Video;
use super::params::{VideoPeriod, VideoSort, VideoType, VideosParams};
use crate::error::Result;
use crate::response::{HelixResponse, Response};
use crate::rest::{Query, TwitchClient};

impl TwitchClient {
    /// Get videos of a user.
    ///
    /// A `game_name` filter is resolved to a game id first and fails the call
    /// if no such game exists.
    pub async fn get_videos(&self, login: &str, params: VideosParams) -> Response<Vec<Video>> {
        Response::from_page(self.videos(login, &params).await)
    }

    async fn videos(&self, login: &str, params: &VideosParams) -> Result<HelixResponse<Vec<Video>>> {
        let user_id = self.resolve_user_id(login).await?;

        let mut query = Query::new();
        query.push("user_id", user_id);
        params.page.apply(&mut query);

        if let Some(name) = params.game_name.as_deref() {
            let game_id = self.resolve_game_id(name).await?;
            query.push("game_id", game_id);
        }

        query
            .push_opt("language", params.language.as_deref())
            .push_opt("period", params.period.as_ref().map(VideoPeriod::as_str))
            .push_opt("sort", params.sort.as_ref().map(VideoSort::as_str))
            .push_opt("type", params.video_type.as_ref().map(VideoType::as_str));

        self.get("videos", &query).await
    }
}
