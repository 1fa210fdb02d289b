// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Failures of a single request against the remote API.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum RequestError {
    /// No access token is available. The request was not sent.
    #[error("Request requires authentication but no access token is available")]
    AuthRequired,
    #[error("Transport error: {msg}")]
    Transport { msg: String },
    #[error("Unexpected HTTP status code {status}")]
    HttpStatus { status: u16 },
    #[error("Failed to decode response: {msg}")]
    Decode { msg: String },
    /// A request for the same resource is still outstanding.
    #[error("A request for the same resource is already in flight")]
    RequestAlreadyInFlight,
}

impl RequestError {
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode {
            msg: value.to_string(),
        }
    }
}

impl From<url::ParseError> for RequestError {
    fn from(value: url::ParseError) -> Self {
        Self::Transport {
            msg: format!("Invalid URL: {value}"),
        }
    }
}
