// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use derivative::Derivative;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, ClientCredentials};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::repos::mocks::MockAuthTokenProvider;
use crate::domain::auth::services::impls::AuthDomainServiceDependencies;
use crate::domain::auth::services::mocks::{MockAuthDomainService, MockOAuthService};
use crate::domain::feed::services::impls::{
    FeedSyncEngineDependencies, LikeToggleCoordinatorDependencies,
};
use crate::domain::feed::services::mocks::{
    MockFeedSyncEngine, MockLikeToggleCoordinator, MockPhotosService,
};
use crate::domain::user_profiles::services::mocks::MockUserProfileService;

pub fn mock_access_key() -> String {
    "access-key".to_string()
}

pub fn mock_secret_key() -> String {
    "secret-key".to_string()
}

pub fn mock_access_token() -> AccessToken {
    AccessToken::from("access-token")
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext::new(
            AppConfig::default(),
            ClientCredentials::new(mock_access_key(), mock_secret_key()),
        )
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockAppDependencies {
    pub auth_domain_service: MockAuthDomainService,
    pub auth_token_provider: MockAuthTokenProvider,
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub ctx: AppContext,
    pub feed_sync_engine: MockFeedSyncEngine,
    pub like_toggle_coordinator: MockLikeToggleCoordinator,
    pub user_profile_service: MockUserProfileService,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            auth_domain_service: Arc::new(mock.auth_domain_service),
            auth_token_provider: Arc::new(mock.auth_token_provider),
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            ctx: Arc::new(mock.ctx),
            feed_sync_engine: Arc::new(mock.feed_sync_engine),
            like_toggle_coordinator: Arc::new(mock.like_toggle_coordinator),
            user_profile_service: Arc::new(mock.user_profile_service),
        }
    }
}

#[derive(Default)]
pub struct MockFeedSyncEngineDependencies {
    pub ctx: AppContext,
    pub auth_token_provider: MockAuthTokenProvider,
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub photos_service: MockPhotosService,
}

impl MockFeedSyncEngineDependencies {
    pub fn into_deps(self) -> FeedSyncEngineDependencies {
        FeedSyncEngineDependencies::from(self)
    }
}

impl From<MockFeedSyncEngineDependencies> for FeedSyncEngineDependencies {
    fn from(value: MockFeedSyncEngineDependencies) -> Self {
        Self {
            ctx: Arc::new(value.ctx),
            auth_token_provider: Arc::new(value.auth_token_provider),
            client_event_dispatcher: Arc::new(value.client_event_dispatcher),
            photos_service: Arc::new(value.photos_service),
        }
    }
}

#[derive(Default)]
pub struct MockLikeToggleCoordinatorDependencies {
    pub auth_token_provider: MockAuthTokenProvider,
    pub photos_service: MockPhotosService,
}

impl MockLikeToggleCoordinatorDependencies {
    pub fn into_deps(self) -> LikeToggleCoordinatorDependencies {
        LikeToggleCoordinatorDependencies::from(self)
    }
}

impl From<MockLikeToggleCoordinatorDependencies> for LikeToggleCoordinatorDependencies {
    fn from(value: MockLikeToggleCoordinatorDependencies) -> Self {
        Self {
            auth_token_provider: Arc::new(value.auth_token_provider),
            photos_service: Arc::new(value.photos_service),
        }
    }
}

#[derive(Default)]
pub struct MockAuthDomainServiceDependencies {
    pub ctx: AppContext,
    pub auth_token_provider: MockAuthTokenProvider,
    pub oauth_service: MockOAuthService,
}

impl MockAuthDomainServiceDependencies {
    pub fn into_deps(self) -> AuthDomainServiceDependencies {
        AuthDomainServiceDependencies::from(self)
    }
}

impl From<MockAuthDomainServiceDependencies> for AuthDomainServiceDependencies {
    fn from(value: MockAuthDomainServiceDependencies) -> Self {
        Self {
            ctx: Arc::new(value.ctx),
            auth_token_provider: Arc::new(value.auth_token_provider),
            oauth_service: Arc::new(value.oauth_service),
        }
    }
}
