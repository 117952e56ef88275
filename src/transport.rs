//! HTTP transport abstraction.
//!
//! Every outbound call goes through [`HttpTransport`], so tests can swap
//! the network for canned responses.

use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use url::Url;

/// A fully built outbound request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        HttpRequest {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }
}

/// Response from an HTTP request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Trait for sending HTTP requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Production transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    pub fn new(inner: Client) -> Self {
        ReqwestTransport { inner }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self
            .inner
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use crate::error::TwitchError;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// A recorded HTTP request
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub url: Url,
        pub headers: HeaderMap,
    }

    impl RecordedRequest {
        /// All values of a query parameter, in order
        pub fn query_values(&self, key: &str) -> Vec<String> {
            self.url
                .query_pairs()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .collect()
        }

        pub fn header(&self, name: &str) -> Option<String> {
            self.headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string())
        }

        /// URL without its query string
        pub fn route(&self) -> String {
            route_of(&self.url)
        }
    }

    #[derive(Debug, Clone)]
    enum Reply {
        Status(u16, String),
        Fail(String),
    }

    /// Mock transport for testing
    ///
    /// Replies are queued per method + URL (query ignored). The last queued
    /// reply of a route keeps being served once the others are consumed.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        replies: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    fn route_of(url: &Url) -> String {
        let mut url = url.clone();
        url.set_query(None);
        url.to_string().trim_end_matches('/').to_string()
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a reply with the given status and body
        pub fn on(self, method: Method, url: &str, status: u16, body: impl Into<String>) -> Self {
            self.push(method, url, Reply::Status(status, body.into()));
            self
        }

        /// Queue a 200 reply with a JSON body
        pub fn on_json(self, method: Method, url: &str, body: serde_json::Value) -> Self {
            self.on(method, url, 200, body.to_string())
        }

        /// Queue a transport failure
        pub fn on_fail(self, method: Method, url: &str, message: &str) -> Self {
            self.push(method, url, Reply::Fail(message.to_string()));
            self
        }

        fn push(&self, method: Method, url: &str, reply: Reply) {
            let key = (method, url.trim_end_matches('/').to_string());
            self.replies
                .lock()
                .unwrap()
                .entry(key)
                .or_default()
                .push_back(reply);
        }

        /// Returns all recorded requests
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Recorded requests whose route (URL without query) matches
        pub fn requests_to(&self, url: &str) -> Vec<RecordedRequest> {
            let url = url.trim_end_matches('/');
            self.requests()
                .into_iter()
                .filter(|r| r.route() == url)
                .collect()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    fn reason(status: u16) -> String {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string()
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            let route = route_of(&request.url);
            self.requests.lock().unwrap().push(RecordedRequest {
                method: request.method.clone(),
                url: request.url.clone(),
                headers: request.headers.clone(),
            });

            let reply = {
                let mut replies = self.replies.lock().unwrap();
                let queue = replies
                    .get_mut(&(request.method.clone(), route.clone()))
                    .ok_or_else(|| {
                        TwitchError::Transport(format!(
                            "no mock reply configured for {} {}",
                            request.method, route
                        ))
                    })?;
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            };

            match reply {
                Some(Reply::Status(status, body)) => Ok(HttpResponse {
                    status,
                    status_text: reason(status),
                    body: body.into_bytes(),
                }),
                Some(Reply::Fail(message)) => Err(TwitchError::Transport(message)),
                None => Err(TwitchError::Transport(format!("no mock reply left for {route}"))),
            }
        }
    }
}
