// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::auth::models::AccessToken;
use crate::domain::shared::models::RequestError;
use crate::domain::user_profiles::models::UserProfile;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserProfileService: Send + Sync {
    /// Loads the profile of the user the token belongs to.
    async fn load_profile(&self, token: &AccessToken) -> Result<UserProfile, RequestError>;

    /// Returns the URL of the small profile image of `username`.
    async fn load_avatar_url(
        &self,
        token: &AccessToken,
        username: &str,
    ) -> Result<String, RequestError>;
}
