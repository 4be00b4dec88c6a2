//! Response definitions
//!
//! Represents responses to clients and their JSON envelope.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    InternalError,
}

impl Status {
    pub fn code(&self) -> StatusCode {
        match self {
            Status::Ok => StatusCode::OK,
            Status::BadRequest => StatusCode::BAD_REQUEST,
            Status::NotFound => StatusCode::NOT_FOUND,
            Status::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A response to send to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// The value involved in the operation, or an error description
    pub message: String,
}

impl Response {
    /// Create an OK response carrying a value
    pub fn ok(value: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            message: value.into(),
        }
    }

    /// Create a failure response
    pub fn failure(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Ok
    }

    /// Build the JSON body for this response
    pub fn envelope(&self) -> Envelope {
        Envelope {
            success: self.is_success(),
            message: self.message.clone(),
        }
    }
}

impl From<StoreError> for Response {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::Conflict | StoreError::BadMethod => Status::BadRequest,
            StoreError::NotFound => Status::NotFound,
            StoreError::Body(_)
            | StoreError::Io(_)
            | StoreError::Serialization(_)
            | StoreError::Config(_) => Status::InternalError,
        };
        Self::failure(status, err.to_string())
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        (self.status.code(), Json(self.envelope())).into_response()
    }
}

/// JSON body of every response
///
/// `success` travels as the string `"true"` or `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(with = "bool_string")]
    pub success: bool,
    pub message: String,
}

mod bool_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(D::Error::custom(format!("expected \"true\" or \"false\", got {:?}", other))),
        }
    }
}
