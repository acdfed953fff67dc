//! Error type for every backend call.

use serde::Deserialize;
use thiserror::Error;

/// Why a backend call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u16, detail: Option<String> },
    /// Anything else, e.g. a success body that does not decode.
    #[error("unexpected response: {0}")]
    Unknown(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status code and the raw response body.
    ///
    /// `detail` is only taken from a JSON object whose `detail` field is a string.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty());
        ApiError::Http { status, detail }
    }

    /// The server-provided message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The message to show a user: the server detail, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_builder() {
            ApiError::Unknown(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
