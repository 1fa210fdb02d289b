// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::auth::models::AccessToken;
use crate::domain::shared::models::RequestError;
use crate::domain::user_profiles::models::UserProfile;
use crate::domain::user_profiles::services::UserProfileService;
use crate::infra::api::UnsplashApiClient;
use crate::infra::user_profile::{MeRecord, UserRecord};

#[async_trait]
impl UserProfileService for UnsplashApiClient {
    #[instrument(skip_all)]
    async fn load_profile(&self, token: &AccessToken) -> Result<UserProfile, RequestError> {
        let url = self.endpoint(&["me"])?;
        let record = self.get::<MeRecord>(token, url).await?;
        Ok(record.into())
    }

    #[instrument(skip(self, token))]
    async fn load_avatar_url(
        &self,
        token: &AccessToken,
        username: &str,
    ) -> Result<String, RequestError> {
        let url = self.endpoint(&["users", username])?;
        let record = self.get::<UserRecord>(token, url).await?;
        Ok(record.profile_image.small)
    }
}
