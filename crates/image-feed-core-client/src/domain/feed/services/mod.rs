// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use feed_sync_engine::FeedSyncEngine;
pub use like_toggle_coordinator::LikeToggleCoordinator;
pub use photos_service::PhotosService;

mod feed_sync_engine;
pub mod impls;
mod like_toggle_coordinator;
mod photos_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::feed_sync_engine::MockFeedSyncEngine;
    pub use super::like_toggle_coordinator::MockLikeToggleCoordinator;
    pub use super::photos_service::MockPhotosService;
}
