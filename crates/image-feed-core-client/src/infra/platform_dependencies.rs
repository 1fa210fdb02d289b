// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppContext, AppDependencies, DynAuthTokenProvider, DynClientEventDispatcher, DynHttpClient,
    DynOAuthService, DynPhotosService, DynUserProfileService,
};
use crate::domain::auth::services::impls::{AuthDomainService, AuthDomainServiceDependencies};
use crate::domain::feed::services::impls::{
    FeedSyncEngine, FeedSyncEngineDependencies, LikeToggleCoordinator,
    LikeToggleCoordinatorDependencies,
};
use crate::infra::api::UnsplashApiClient;

/// Everything the host provides. Turned into the full dependency graph of the client.
pub struct PlatformDependencies {
    pub ctx: AppContext,
    pub auth_token_provider: DynAuthTokenProvider,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub http_client: DynHttpClient,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(d: PlatformDependencies) -> Self {
        let ctx = Arc::new(d.ctx);
        let api_client = Arc::new(UnsplashApiClient::new(d.http_client, ctx.clone()));

        let oauth_service: DynOAuthService = api_client.clone();
        let photos_service: DynPhotosService = api_client.clone();
        let user_profile_service: DynUserProfileService = api_client;

        let auth_domain_service = Arc::new(AuthDomainService::from(AuthDomainServiceDependencies {
            ctx: ctx.clone(),
            auth_token_provider: d.auth_token_provider.clone(),
            oauth_service,
        }));

        let feed_sync_engine = Arc::new(FeedSyncEngine::from(FeedSyncEngineDependencies {
            ctx: ctx.clone(),
            auth_token_provider: d.auth_token_provider.clone(),
            client_event_dispatcher: d.client_event_dispatcher.clone(),
            photos_service: photos_service.clone(),
        }));

        let like_toggle_coordinator = Arc::new(LikeToggleCoordinator::from(
            LikeToggleCoordinatorDependencies {
                auth_token_provider: d.auth_token_provider.clone(),
                photos_service,
            },
        ));

        AppDependencies {
            auth_domain_service,
            auth_token_provider: d.auth_token_provider,
            client_event_dispatcher: d.client_event_dispatcher,
            ctx,
            feed_sync_engine,
            like_toggle_coordinator,
            user_profile_service,
        }
    }
}
