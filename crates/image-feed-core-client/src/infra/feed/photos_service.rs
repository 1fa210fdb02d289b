// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::auth::models::AccessToken;
use crate::domain::feed::models::{FeedPage, Photo, PhotoId};
use crate::domain::feed::services::PhotosService;
use crate::domain::general::models::HttpRequest;
use crate::domain::general::services::HttpClient;
use crate::domain::shared::models::RequestError;
use crate::infra::api::UnsplashApiClient;
use crate::infra::feed::PhotoRecord;

#[async_trait]
impl PhotosService for UnsplashApiClient {
    #[instrument(skip(self, token))]
    async fn load_photos(
        &self,
        token: &AccessToken,
        page: &FeedPage,
    ) -> Result<Vec<Photo>, RequestError> {
        let mut url = self.endpoint(&["photos"])?;
        url.query_pairs_mut()
            .append_pair("page", &page.number.to_string())
            .append_pair("per_page", &page.size.to_string());

        let records = self.get::<Vec<PhotoRecord>>(token, url).await?;
        Ok(records.into_iter().map(Photo::from).collect())
    }

    #[instrument(skip(self, token))]
    async fn set_photo_liked(
        &self,
        token: &AccessToken,
        photo_id: &PhotoId,
        is_liked: bool,
    ) -> Result<(), RequestError> {
        let url = self.endpoint(&["photos", photo_id.as_str(), "like"])?;
        let request = if is_liked {
            HttpRequest::post(url)
        } else {
            HttpRequest::delete(url)
        };

        self.http_client
            .request(request.with_bearer_token(token))
            .await?
            .error_for_status()?;
        Ok(())
    }
}
