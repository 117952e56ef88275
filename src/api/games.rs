use super::empty_page;
use super::models::Game;
use super::params::PageParams;
use crate::error::Result;
use crate::response::{HelixResponse, Response};
use crate::rest::{Query, TwitchClient};

impl TwitchClient {
    /// Get games sorted by current viewers, most popular first
    pub async fn get_top_games(&self, page: PageParams) -> Response<Vec<Game>> {
        let mut query = Query::new();
        page.apply(&mut query);
        Response::from_page(self.get("games/top", &query).await)
    }

    /// Get categories or games by exact name (max 100 names)
    pub async fn get_games<S: AsRef<str>>(&self, names: &[S]) -> Response<Vec<Game>> {
        Response::from_page(self.games(names).await)
    }

    pub(crate) async fn games<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<HelixResponse<Vec<Game>>> {
        if names.is_empty() {
            return Ok(empty_page());
        }

        let mut query = Query::new();
        query.push_all("name", names.iter().map(AsRef::<str>::as_ref));
        self.get("games", &query).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{client, games_body, helix};
    use crate::api::PageParams;
    use crate::transport::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn top_games_forward_pagination() {
        let (client, transport) = client(MockTransport::new().on_json(
            Method::GET,
            &helix("games/top"),
            json!({
                "data": [{"id": "493057", "name": "PUBG: BATTLEGROUNDS", "box_art_url": "", "igdb_id": "27789"}],
                "pagination": {"cursor": "eyJzIjoxMDAsImQiOmZhbHNlLCJ0Ijp0cnVlfQ=="}
            }),
        ));

        let response = client
            .get_top_games(PageParams {
                first: Some(1),
                after: Some("abc".to_string()),
                before: None,
            })
            .await;

        assert!(response.ok);
        assert_eq!(response.result().unwrap()[0].igdb_id, "27789");
        assert_eq!(
            response.pagination.and_then(|p| p.cursor).as_deref(),
            Some("eyJzIjoxMDAsImQiOmZhbHNlLCJ0Ijp0cnVlfQ==")
        );
        let request = &transport.requests()[0];
        assert_eq!(request.url.query(), Some("after=abc&first=1"));
    }

    #[tokio::test]
    async fn top_games_without_params_has_no_query() {
        let (client, transport) = client(
            MockTransport::new().on_json(Method::GET, &helix("games/top"), json!({"data": []})),
        );

        let response = client.get_top_games(PageParams::default()).await;

        assert!(response.ok);
        assert!(response.pagination.is_none());
        assert_eq!(transport.requests()[0].url.query(), None);
    }

    #[tokio::test]
    async fn get_games_encodes_names() {
        let (client, transport) = client(MockTransport::new().on_json(
            Method::GET,
            &helix("games"),
            games_body(&[("32982", "Grand Theft Auto V")]),
        ));

        let response = client.get_games(&["Grand Theft Auto V"]).await;

        assert!(response.ok);
        let request = &transport.requests()[0];
        assert_eq!(request.url.query(), Some("name=Grand+Theft+Auto+V"));
        assert_eq!(request.query_values("name"), vec!["Grand Theft Auto V"]);
    }

    #[tokio::test]
    async fn get_games_with_no_names_skips_the_request() {
        let (client, transport) = client(MockTransport::new());

        let response = client.get_games::<String>(&[]).await;

        assert!(response.ok);
        assert_eq!(transport.request_count(), 0);
    }
}
