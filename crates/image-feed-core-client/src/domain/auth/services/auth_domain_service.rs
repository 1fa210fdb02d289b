// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use url::Url;

use crate::domain::auth::models::{AccessToken, AuthError, AuthorizationCode};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthDomainService: Send + Sync {
    /// The page the user has to visit to grant access to the app.
    fn authorization_url(&self) -> Result<Url, AuthError>;

    /// Exchanges `code` for an access token and stores it.
    ///
    /// Calling this again with the same code while the first exchange is outstanding fails with
    /// `AuthError::RequestAlreadyInFlight`. Calling it with a different code cancels the pending
    /// exchange, which then resolves to `AuthError::Cancelled`.
    async fn exchange_code(&self, code: &AuthorizationCode) -> Result<AccessToken, AuthError>;
}
