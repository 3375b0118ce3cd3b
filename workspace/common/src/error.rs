use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the school API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure of a request against the school API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("Request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error {status}")]
    Server { status: u16, message: Option<String> },
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to show the user: the server-provided `message` when there is
    /// a non-blank one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }

    pub fn from_error_body(status: u16, body: Option<ErrorBody>) -> Self {
        ApiError::Server {
            status,
            message: body.and_then(|b| b.message),
        }
    }
}
