// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::auth::models::{AccessToken, OAuthToken};

/// Response of the token endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OAuthTokenRecord {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    /// Seconds since the Unix epoch.
    pub created_at: Option<i64>,
    pub user_id: Option<u64>,
    pub username: Option<String>,
}

impl From<OAuthTokenRecord> for OAuthToken {
    fn from(value: OAuthTokenRecord) -> Self {
        OAuthToken {
            access_token: AccessToken::from(value.access_token),
            token_type: value.token_type,
            scope: value.scope,
            created_at: value
                .created_at
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
            username: value.username,
        }
    }
}
