//! Inbound request model, normalized once at the handler boundary.

use crate::store::Record;

use serde_json::Value;
use thiserror::Error;

/// Reasons a request is rejected before reaching the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No body, or an empty text body.
    #[error("invalid request, you are missing the parameter body")]
    MissingBody,

    /// The `{id}` path parameter is absent or empty.
    #[error("invalid request, you are missing the path parameter id")]
    MissingPathId,

    /// The body is not valid JSON.
    #[error("invalid request, body is not valid JSON: {0}")]
    MalformedBody(String),

    /// The body is valid JSON but not an object.
    #[error("invalid request, body must be a JSON object")]
    NotAnObject,

    /// An update body without attributes.
    #[error("invalid request, no arguments provided")]
    NoAttributes,

    /// An update body naming the primary key.
    #[error("invalid request, the primary key '{0}' cannot be updated")]
    PrimaryKeyUpdate(String),

    /// An update body with an empty attribute name.
    #[error("invalid request, attribute names must not be empty")]
    EmptyAttributeName,
}

/// Body of an inbound request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    /// Already decoded structure.
    Structured(Value),
    /// JSON text still to be decoded.
    Text(String),
    /// No body.
    #[default]
    Absent,
}

impl RequestBody {
    /// Whether a body was supplied at all.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Structured(Value::Null) | Self::Absent => false,
            Self::Text(text) => !text.is_empty(),
            Self::Structured(_) => true,
        }
    }

    /// Decodes the body into a record.
    pub fn into_record(self) -> Result<Record, RequestError> {
        match self {
            Self::Absent | Self::Structured(Value::Null) => Err(RequestError::MissingBody),
            Self::Text(text) if text.is_empty() => Err(RequestError::MissingBody),
            Self::Text(text) => parse_record(&text),
            Self::Structured(Value::Object(object)) => Ok(object.into_iter().collect()),
            Self::Structured(_) => Err(RequestError::NotAnObject),
        }
    }
}

// decoding straight into the record keeps the caller's attribute order
fn parse_record(text: &str) -> Result<Record, RequestError> {
    serde_json::from_str::<Record>(text).map_err(|error| {
        match serde_json::from_str::<Value>(text) {
            Ok(_) => RequestError::NotAnObject,
            Err(_) => RequestError::MalformedBody(error.to_string()),
        }
    })
}

impl From<Option<Value>> for RequestBody {
    /// Interprets the `body` field of a raw API Gateway event.
    fn from(body: Option<Value>) -> Self {
        match body {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(text)) => Self::Text(text),
            Some(value) => Self::Structured(value),
        }
    }
}

/// A request as seen by a handler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductRequest {
    /// Value of the `{id}` path parameter, if any.
    pub path_id: Option<String>,
    /// Request body.
    pub body: RequestBody,
}

impl ProductRequest {
    /// Request with neither path id nor body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Request carrying only a body.
    pub fn with_body(body: RequestBody) -> Self {
        Self {
            path_id: None,
            body,
        }
    }

    /// Request carrying only a path id.
    pub fn with_path_id(id: impl Into<String>) -> Self {
        Self {
            path_id: Some(id.into()),
            body: RequestBody::Absent,
        }
    }

    /// Builds a request from a raw API Gateway proxy event.
    pub fn from_event(event: &Value) -> Self {
        let path_id = event
            .pointer("/pathParameters/id")
            .and_then(Value::as_str)
            .map(str::to_string);
        let body = RequestBody::from(event.get("body").cloned());
        Self { path_id, body }
    }

    /// The path id, rejecting an absent or empty value.
    pub fn require_path_id(&self) -> Result<&str, RequestError> {
        match self.path_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(RequestError::MissingPathId),
        }
    }
}
