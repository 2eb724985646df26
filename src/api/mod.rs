mod trains;
mod users;

pub use trains::{search_trains, TrainSearchQuery};
pub use users::{CurrentUserResponse, HttpUserApi, StatusAck, UserApi, UserProfile};

use serde::Deserialize;
use std::fmt;

/// Where the backend lives. Defaults to the origin the page was served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Use the current page origin (`https://host:port`) as the base URL
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn from_window() -> Self {
        Self::new("http://localhost:8080")
    }

    /// Join an absolute API path onto the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The backend answered with a non-success status code
    Http { status: u16, message: Option<String> },
    /// The response body was not the JSON we expected
    Decode(String),
}

impl ApiError {
    /// The human readable message the backend put in its error body, if any
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message: Some(message), .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Request failed: {e}"),
            Self::Http { status, message: Some(message) } => write!(f, "HTTP {status}: {message}"),
            Self::Http { status, message: None } => write!(f, "HTTP error: {status}"),
            Self::Decode(e) => write!(f, "Failed to deserialize: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decode a JSON body, turning non-2xx responses into [`ApiError::Http`]
/// carrying the backend's `message` when it sent one.
async fn decode_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Http { status: status.as_u16(), message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
