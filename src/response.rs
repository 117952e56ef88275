use crate::error::TwitchError;
use serde::{Deserialize, Serialize};

/// Cursor block attached to paginated Helix responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Raw Helix payload: every endpoint wraps its records in `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct HelixResponse<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> HelixResponse<T> {
    /// Wrap records that did not come from the network (empty lookups).
    pub fn from_data(data: T) -> Self {
        HelixResponse {
            data,
            pagination: None,
        }
    }

    /// Cursor for the next/previous page, if Helix sent a non-empty one
    pub fn cursor(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.cursor.as_deref())
            .filter(|c| !c.is_empty())
    }
}

/// Response is the envelope every public client method resolves to.
///
/// Either `{ok: true, result}` or `{ok: false, error?, statusText?}`:
/// an HTTP status failure fills `statusText`, anything else fills `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    /// Whether the call succeeded
    pub ok: bool,

    /// Result payload (the `data` field of the Helix response)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    /// Cursor for further pages, when the endpoint paginates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    /// Error detail (transport, parsing, failed lookup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Status text of a non-2xx response
    #[serde(
        rename = "statusText",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status_text: Option<String>,
}

impl<T> Response<T> {
    /// Successful envelope
    pub fn success(result: T) -> Self {
        Response {
            ok: true,
            result: Some(result),
            pagination: None,
            error: None,
            status_text: None,
        }
    }

    /// Failed envelope built from an error
    pub fn failure(error: TwitchError) -> Self {
        let (error, status_text) = match error {
            TwitchError::Status { status_text, .. } => (None, Some(status_text)),
            other => (Some(other.to_string()), None),
        };
        Response {
            ok: false,
            result: None,
            pagination: None,
            error,
            status_text,
        }
    }

    /// Borrow the result if the call succeeded
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Failure message: `error` if set, else `statusText`
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.status_text.as_deref())
    }

    /// Convert back into a `Result`, for callers that prefer `?`
    pub fn into_result(self) -> Result<T, String> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(self
                .error
                .or(self.status_text)
                .unwrap_or_else(|| "unknown error".to_string())),
        }
    }

    /// Envelope for a plain result
    pub fn from_result(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(value) => Response::success(value),
            Err(e) => Response::failure(e),
        }
    }

    /// Envelope for a Helix payload: `result` is its `data`, plus the cursor if any
    pub fn from_page(result: crate::error::Result<HelixResponse<T>>) -> Self {
        match result {
            Ok(page) => {
                let pagination = page.cursor().map(|c| Pagination {
                    cursor: Some(c.to_string()),
                });
                Response {
                    pagination,
                    ..Response::success(page.data)
                }
            }
            Err(e) => Response::failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = Response::success(vec!["a".to_string()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true, "result": ["a"]}));
    }

    #[test]
    fn test_status_failure_uses_status_text() {
        let response: Response<()> = Response::failure(TwitchError::status(400, "Bad Request"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"ok": false, "statusText": "Bad Request"}));
        assert_eq!(response.message(), Some("Bad Request"));
    }

    #[test]
    fn test_other_failure_uses_error() {
        let response: Response<()> =
            Response::failure(TwitchError::Transport("connection refused".to_string()));
        assert!(!response.ok);
        assert_eq!(response.status_text, None);
        assert!(response.error.unwrap().contains("connection refused"));
    }

    #[test]
    fn test_helix_payload_keeps_cursor() {
        let json = r#"{
            "data": [{"id": "1"}],
            "pagination": {"cursor": "eyJiIjpudWxsfQ"}
        }"#;

        let page: HelixResponse<Vec<serde_json::Value>> = serde_json::from_str(json).unwrap();
        let response = Response::from_page(Ok(page));
        assert!(response.ok);
        assert_eq!(response.result().map(Vec::len), Some(1));
        assert_eq!(
            response.pagination.and_then(|p| p.cursor).as_deref(),
            Some("eyJiIjpudWxsfQ")
        );
    }

    #[test]
    fn test_helix_payload_empty_pagination() {
        let json = r#"{"data": [], "pagination": {}}"#;
        let page: HelixResponse<Vec<serde_json::Value>> = serde_json::from_str(json).unwrap();
        let response = Response::from_page(Ok(page));
        assert_eq!(response.pagination, None);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Response::success(3).into_result(), Ok(3));
        let failed: Response<i32> = Response::failure(TwitchError::status(503, "Service Unavailable"));
        assert_eq!(failed.into_result(), Err("Service Unavailable".to_string()));
    }
}
