// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::feed::models::{PageLoadOutcome, Photo, PhotoId};

/// Owns the ordered list of photos loaded so far.
///
/// Photos are appended page by page and never reordered. A photo whose id is already part of
/// the list is never appended a second time. Every change is announced with a
/// `ClientEvent::FeedChanged`.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FeedSyncEngine: Send + Sync {
    /// Fetches the page following the last loaded one and merges it into the list.
    ///
    /// Calls made while a page is being fetched are ignored. A failed fetch is retried once
    /// after `AppConfig::page_retry_delay`.
    async fn load_next_page(&self) -> PageLoadOutcome;

    fn current_photos(&self) -> Vec<Photo>;
    fn photo(&self, photo_id: &PhotoId) -> Option<Photo>;
    fn last_loaded_page(&self) -> Option<u32>;
    fn is_fetching(&self) -> bool;

    /// Empties the list, cancels any fetch or scheduled retry and starts over at page 1.
    fn reset(&self);

    /// Sets the like flag of a photo after the server confirmed the change. Returns `false` if
    /// the photo is not part of the list (anymore).
    fn apply_like_result(&self, photo_id: &PhotoId, is_liked: bool) -> bool;
}
