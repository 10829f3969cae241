//! Uniform response shape for every handler.

use lambda_http::{Body, http};
use serde::{Deserialize, Serialize};
use std::collections;

/// Content type sent with every response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Transport response: status code, headers and a JSON text body.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Response headers.
    pub headers: collections::BTreeMap<String, String>,
    /// JSON-encoded body.
    pub body: String,
}

/// Wraps a status code and a serializable body into an [`ApiResponse`].
///
/// A body that cannot be serialized produces a `500` with a fixed error body.
///
/// ```rust
/// use inventory_crud::response;
/// use serde_json::json;
///
/// let response = response::build_response(200, &json!({"items": []}));
/// assert_eq!(response.status_code, 200);
/// assert_eq!(response.body, r#"{"items":[]}"#);
/// ```
pub fn build_response(status_code: u16, body: &impl Serialize) -> ApiResponse {
    let headers =
        collections::BTreeMap::from([("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())]);
    match serde_json::to_string(body) {
        Ok(body) => ApiResponse {
            status_code,
            headers,
            body,
        },
        Err(error) => {
            tracing::error!(%error, "response body serialization failed");
            ApiResponse {
                status_code: 500,
                headers,
                body: r#"{"message":"response serialization failed"}"#.to_string(),
            }
        }
    }
}

impl TryFrom<ApiResponse> for http::Response<Body> {
    type Error = http::Error;

    fn try_from(response: ApiResponse) -> Result<Self, Self::Error> {
        let mut builder = http::Response::builder().status(response.status_code);
        for (name, value) in &response.headers {
            builder = builder.header(name, value);
        }
        builder.body(Body::Text(response.body))
    }
}
