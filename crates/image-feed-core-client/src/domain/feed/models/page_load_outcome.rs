// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RequestError;

/// What a call to `FeedSyncEngine::load_next_page` did.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoadOutcome {
    /// Another page was being fetched already. Nothing changed.
    Ignored,
    /// The page was fetched and `appended` previously unseen photos were added.
    Merged { page: u32, appended: usize },
    /// The fetch failed and a single retry of `page` was scheduled.
    RetryScheduled { page: u32 },
    /// The fetch failed and will not be retried.
    Failed { page: u32, error: RequestError },
    /// The feed was reset while the page was loading. The result was dropped.
    Discarded { page: u32 },
}
