use super::models::Cheermote;
use crate::response::Response;
use crate::rest::{Query, TwitchClient};

impl TwitchClient {
    /// Get the global cheermotes
    pub async fn get_cheermotes(&self) -> Response<Vec<Cheermote>> {
        Response::from_page(self.get("bits/cheermotes", &Query::new()).await)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{client, helix};
    use crate::transport::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn cheermotes_are_unfiltered() {
        let (client, transport) = client(MockTransport::new().on_json(
            Method::GET,
            &helix("bits/cheermotes"),
            json!({"data": [{"prefix": "Cheer", "tiers": [], "type": "global_first_party", "order": 1}]}),
        ));

        let response = client.get_cheermotes().await;

        assert!(response.ok);
        assert_eq!(response.result().unwrap()[0].prefix, "Cheer");
        assert_eq!(transport.requests()[0].url.query(), None);
    }

    #[tokio::test]
    async fn cheermotes_report_transport_failure() {
        let (client, _) = client(MockTransport::new().on_fail(
            Method::GET,
            &helix("bits/cheermotes"),
            "dns error",
        ));

        let response = client.get_cheermotes().await;

        assert!(!response.ok);
        assert!(response.status_text.is_none());
        assert!(response.message().unwrap().contains("dns error"));
    }
}
