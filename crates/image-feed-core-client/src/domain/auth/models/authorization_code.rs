// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use image_feed_utils::id_string;
use url::Url;

id_string!(
    /// The one-time code handed out by the authorization page after the user granted access.
    AuthorizationCode
);

/// Path the authorization page redirects to when it displays the code natively.
pub const NATIVE_REDIRECT_PATH: &str = "/oauth/authorize/native";

impl AuthorizationCode {
    /// Extracts the authorization code from the URL the authorization page redirected to.
    /// Returns `None` for any URL that is not the native redirect or has no `code` item.
    pub fn from_redirect_url(url: &Url) -> Option<Self> {
        if url.path() != NATIVE_REDIRECT_PATH {
            return None;
        }

        url.query_pairs()
            .find(|(name, _)| name == "code")
            .map(|(_, value)| value.into_owned())
            .filter(|code| !code.is_empty())
            .map(Self::from)
    }
}
