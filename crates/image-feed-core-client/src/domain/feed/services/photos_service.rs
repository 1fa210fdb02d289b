// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::auth::models::AccessToken;
use crate::domain::feed::models::{FeedPage, Photo, PhotoId};
use crate::domain::shared::models::RequestError;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PhotosService: Send + Sync {
    /// Loads one page of the feed in server order.
    async fn load_photos(
        &self,
        token: &AccessToken,
        page: &FeedPage,
    ) -> Result<Vec<Photo>, RequestError>;

    /// Likes (`is_liked == true`) or unlikes a photo.
    async fn set_photo_liked(
        &self,
        token: &AccessToken,
        photo_id: &PhotoId,
        is_liked: bool,
    ) -> Result<(), RequestError>;
}
