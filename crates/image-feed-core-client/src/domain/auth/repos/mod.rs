// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_token_provider::AuthTokenProvider;

mod auth_token_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::auth_token_provider::MockAuthTokenProvider;
}
