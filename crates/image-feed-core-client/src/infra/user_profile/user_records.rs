// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;

use crate::domain::user_profiles::models::UserProfile;

/// Response of `GET /me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeRecord {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

/// Response of `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub profile_image: ProfileImageRecord,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileImageRecord {
    pub small: String,
    pub medium: Option<String>,
    pub large: Option<String>,
}

impl From<MeRecord> for UserProfile {
    fn from(value: MeRecord) -> Self {
        UserProfile::new(
            value.username,
            value.first_name.as_deref(),
            value.last_name.as_deref(),
            value.bio,
        )
    }
}
