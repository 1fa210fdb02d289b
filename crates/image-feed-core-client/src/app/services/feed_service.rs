// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};

use image_feed_proc_macros::InjectDependencies;

use crate::app::deps::{DynFeedSyncEngine, DynLikeToggleCoordinator};
use crate::dtos::{PageLoadOutcome, Photo, PhotoId};

#[derive(InjectDependencies)]
pub struct FeedService {
    #[inject]
    feed_sync_engine: DynFeedSyncEngine,
    #[inject]
    like_toggle_coordinator: DynLikeToggleCoordinator,
}

impl FeedService {
    pub async fn load_next_page(&self) -> PageLoadOutcome {
        self.feed_sync_engine.load_next_page().await
    }

    pub fn photos(&self) -> Vec<Photo> {
        self.feed_sync_engine.current_photos()
    }

    pub fn photo(&self, photo_id: &PhotoId) -> Option<Photo> {
        self.feed_sync_engine.photo(photo_id)
    }

    pub fn last_loaded_page(&self) -> Option<u32> {
        self.feed_sync_engine.last_loaded_page()
    }

    pub fn is_loading(&self) -> bool {
        self.feed_sync_engine.is_fetching()
    }

    pub fn is_toggling_like(&self, photo_id: &PhotoId) -> bool {
        self.like_toggle_coordinator.is_toggling(photo_id)
    }

    /// Likes or unlikes the photo depending on its current state and returns the new state.
    /// The feed is only updated once the server confirmed the change.
    pub async fn toggle_like(&self, photo_id: &PhotoId) -> Result<bool> {
        let Some(photo) = self.feed_sync_engine.photo(photo_id) else {
            bail!("Photo {photo_id} is not part of the feed.")
        };

        self.like_toggle_coordinator
            .toggle(photo_id, photo.is_liked)
            .await?;

        let is_liked = !photo.is_liked;
        self.feed_sync_engine.apply_like_result(photo_id, is_liked);
        Ok(is_liked)
    }

    pub fn reset(&self) {
        self.feed_sync_engine.reset()
    }
}
