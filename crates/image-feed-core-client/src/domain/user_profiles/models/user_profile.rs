// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    /// First and last name joined by a space.
    pub name: String,
    /// The username prefixed with `@`.
    pub login_name: String,
    pub bio: Option<String>,
}

impl UserProfile {
    pub fn new(
        username: impl Into<String>,
        first_name: Option<&str>,
        last_name: Option<&str>,
        bio: Option<String>,
    ) -> Self {
        let username = username.into();
        let name = [first_name, last_name]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .join(" ");

        Self {
            login_name: format!("@{username}"),
            username,
            name,
            bio: bio.filter(|bio| !bio.trim().is_empty()),
        }
    }
}
