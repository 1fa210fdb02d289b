// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use access_token::AccessToken;
pub use auth_error::AuthError;
pub use authorization_code::AuthorizationCode;
pub use oauth_token::OAuthToken;

mod access_token;
mod auth_error;
mod authorization_code;
mod oauth_token;
