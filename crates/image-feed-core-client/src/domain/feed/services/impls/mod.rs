// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use feed_sync_engine::{FeedSyncEngine, FeedSyncEngineDependencies};
pub use like_toggle_coordinator::{LikeToggleCoordinator, LikeToggleCoordinatorDependencies};

mod feed_sync_engine;
mod like_toggle_coordinator;
