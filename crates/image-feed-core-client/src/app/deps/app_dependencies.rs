// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::auth::repos::AuthTokenProvider;
use crate::domain::auth::services::{AuthDomainService, OAuthService};
use crate::domain::feed::services::{FeedSyncEngine, LikeToggleCoordinator, PhotosService};
use crate::domain::general::services::HttpClient;
use crate::domain::user_profiles::services::UserProfileService;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynAuthDomainService = Arc<dyn AuthDomainService>;
pub(crate) type DynAuthTokenProvider = Arc<dyn AuthTokenProvider>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynFeedSyncEngine = Arc<dyn FeedSyncEngine>;
pub(crate) type DynHttpClient = Arc<dyn HttpClient>;
pub(crate) type DynLikeToggleCoordinator = Arc<dyn LikeToggleCoordinator>;
pub(crate) type DynOAuthService = Arc<dyn OAuthService>;
pub(crate) type DynPhotosService = Arc<dyn PhotosService>;
pub(crate) type DynUserProfileService = Arc<dyn UserProfileService>;

pub struct AppDependencies {
    pub auth_domain_service: DynAuthDomainService,
    pub auth_token_provider: DynAuthTokenProvider,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub feed_sync_engine: DynFeedSyncEngine,
    pub like_toggle_coordinator: DynLikeToggleCoordinator,
    pub user_profile_service: DynUserProfileService,
}
