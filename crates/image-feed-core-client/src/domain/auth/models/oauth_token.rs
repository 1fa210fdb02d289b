// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::auth::models::AccessToken;

/// Result of exchanging an authorization code.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthToken {
    pub access_token: AccessToken,
    pub token_type: String,
    pub scope: String,
    pub created_at: Option<DateTime<Utc>>,
    pub username: Option<String>,
}
