// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::feed::models::PhotoId;
use crate::domain::shared::models::RequestError;

/// Likes or unlikes photos on the server without touching any cached state.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait LikeToggleCoordinator: Send + Sync {
    /// Likes the photo if `current_is_liked` is false, unlikes it otherwise.
    ///
    /// Fails with `RequestError::RequestAlreadyInFlight` while another toggle for the same photo
    /// is outstanding. Failed mutations are never retried.
    async fn toggle(&self, photo_id: &PhotoId, current_is_liked: bool)
        -> Result<(), RequestError>;

    fn is_toggling(&self, photo_id: &PhotoId) -> bool;
}
