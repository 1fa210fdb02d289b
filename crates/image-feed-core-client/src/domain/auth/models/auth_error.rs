// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RequestError;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum AuthError {
    #[error("An access token request for this authorization code is already in flight")]
    RequestAlreadyInFlight,
    #[error("The access token request was superseded by a request for another code")]
    Cancelled,
    #[error("Failed to persist the access token: {msg}")]
    Storage { msg: String },
    #[error(transparent)]
    Request(#[from] RequestError),
}
