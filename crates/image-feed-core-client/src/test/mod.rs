// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::{
    MockAppDependencies, MockAuthDomainServiceDependencies, MockFeedSyncEngineDependencies,
    MockLikeToggleCoordinatorDependencies,
};
pub use photo_builder::PhotoBuilder;

mod mock_app_dependencies;
mod photo_builder;

pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_access_key as access_key, mock_access_token as access_token,
        mock_secret_key as secret_key,
    };
}
