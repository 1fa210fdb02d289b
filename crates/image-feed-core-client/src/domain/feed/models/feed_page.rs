// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// A page of the remote feed. Page numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedPage {
    pub number: u32,
    pub size: u32,
}

impl FeedPage {
    /// The page that follows `last_loaded_page` (page 1 if nothing was loaded yet).
    pub fn following(last_loaded_page: Option<u32>, size: u32) -> Self {
        Self {
            number: last_loaded_page.unwrap_or(0) + 1,
            size,
        }
    }
}
