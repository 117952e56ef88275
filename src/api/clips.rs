use super::models::Clip;
use super::params::ClipsParams;
use crate::error::Result;
use crate::response::{HelixResponse, Response};
use crate::rest::{Query, TwitchClient};

impl TwitchClient {
    /// Get clips of a broadcaster, most viewed first
    pub async fn get_clips(&self, broadcaster: &str, params: ClipsParams) -> Response<Vec<Clip>> {
        Response::from_page(self.clips(broadcaster, &params).await)
    }

    async fn clips(
        &self,
        broadcaster: &str,
        params: &ClipsParams,
    ) -> Result<HelixResponse<Vec<Clip>>> {
        let broadcaster_id = self.resolve_user_id(broadcaster).await?;

        let mut query = Query::new();
        query.push("broadcaster_id", broadcaster_id);
        params.apply(&mut query);
        self.get("clips", &query).await
    }
}
