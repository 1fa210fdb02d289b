// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::debug;

use image_feed_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynAuthTokenProvider, DynClientEventDispatcher, DynUserProfileService,
};
use crate::dtos::{RequestError, UserProfile};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ProfileService {
    #[inject]
    auth_token_provider: DynAuthTokenProvider,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    user_profile_service: DynUserProfileService,
    avatar_request: Mutex<Option<AbortHandle>>,
}

impl ProfileService {
    /// Loads the profile of the signed-in user followed by their avatar.
    pub async fn load_profile(&self) -> Result<UserProfile> {
        let token = self
            .auth_token_provider
            .current_token()
            .ok_or(RequestError::AuthRequired)?;

        let profile = self.user_profile_service.load_profile(&token).await?;
        self.ctx.set_profile(profile.clone());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ProfileChanged);

        self.load_avatar_url(&profile.username).await?;
        Ok(profile)
    }

    /// Loads the avatar URL of `username`. Cancels a previous avatar request that is still
    /// running, which then returns `Ok(None)`.
    pub async fn load_avatar_url(&self, username: &str) -> Result<Option<String>> {
        let token = self
            .auth_token_provider
            .current_token()
            .ok_or(RequestError::AuthRequired)?;

        let user_profile_service = self.user_profile_service.clone();
        let owned_username = username.to_string();
        let task = tokio::spawn(async move {
            user_profile_service
                .load_avatar_url(&token, &owned_username)
                .await
        });

        if let Some(previous_request) = self.avatar_request.lock().replace(task.abort_handle()) {
            previous_request.abort();
        }

        let url = match task.await {
            Ok(result) => result?,
            Err(err) if err.is_cancelled() => {
                debug!("Avatar request for {username} was superseded.");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        self.ctx.set_avatar_url(url.clone());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AvatarChanged { url: url.clone() });

        Ok(Some(url))
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.ctx.profile()
    }

    pub fn avatar_url(&self) -> Option<String> {
        self.ctx.avatar_url()
    }
}
