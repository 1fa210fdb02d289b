// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::domain::auth::models::AccessToken;

/// Holds the access token of the signed-in user.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthTokenProvider: Send + Sync {
    /// Returns `None` if the user is not signed in.
    fn current_token(&self) -> Option<AccessToken>;
    fn store_token(&self, token: &AccessToken) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}
