// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_domain_service::AuthDomainService;
pub use oauth_service::OAuthService;

mod auth_domain_service;
pub mod impls;
mod oauth_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::auth_domain_service::MockAuthDomainService;
    pub use super::oauth_service::MockOAuthService;
}
