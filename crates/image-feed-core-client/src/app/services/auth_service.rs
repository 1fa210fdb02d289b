// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{info, warn};

use image_feed_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynAuthDomainService, DynAuthTokenProvider, DynClientEventDispatcher,
    DynFeedSyncEngine,
};
use crate::dtos::{AuthError, AuthorizationCode, Url};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct AuthService {
    #[inject]
    auth_domain_service: DynAuthDomainService,
    #[inject]
    auth_token_provider: DynAuthTokenProvider,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    feed_sync_engine: DynFeedSyncEngine,
}

impl AuthService {
    /// The page to open in a browser so that the user can grant access.
    pub fn authorization_url(&self) -> Result<Url, AuthError> {
        self.auth_domain_service.authorization_url()
    }

    /// Returns the authorization code if `url` is the redirect of the authorization page.
    pub fn authorization_code(&self, url: &Url) -> Option<AuthorizationCode> {
        AuthorizationCode::from_redirect_url(url)
    }

    pub async fn login_with_code(&self, code: &AuthorizationCode) -> Result<(), AuthError> {
        self.auth_domain_service.exchange_code(code).await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AuthStatusChanged {
                is_authenticated: true,
            });
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token_provider.current_token().is_some()
    }

    /// Forgets the access token together with everything loaded on behalf of the user.
    ///
    /// User data is dropped even if the token could not be removed from storage. The storage
    /// error is returned afterwards.
    pub fn logout(&self) -> Result<()> {
        let result = self.auth_token_provider.clear_token();
        self.feed_sync_engine.reset();
        self.ctx.reset_user_data();

        match result {
            Ok(()) => info!("Logged out."),
            Err(ref err) => warn!("Logged out, but failed to remove the stored token. {err}"),
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AuthStatusChanged {
                is_authenticated: false,
            });
        result
    }
}
