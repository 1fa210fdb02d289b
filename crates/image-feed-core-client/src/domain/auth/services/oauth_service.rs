// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::auth::models::{AuthorizationCode, OAuthToken};
use crate::domain::shared::models::RequestError;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait OAuthService: Send + Sync {
    /// Exchanges `code` for an access token.
    async fn request_access_token(&self, code: &AuthorizationCode)
        -> Result<OAuthToken, RequestError>;
}
