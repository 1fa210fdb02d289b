// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{info, warn};

use image_feed_proc_macros::DependenciesStruct;

use crate::app::deps::{DynAuthTokenProvider, DynPhotosService};
use crate::domain::feed::models::PhotoId;
use crate::domain::shared::models::RequestError;

use super::super::LikeToggleCoordinator as LikeToggleCoordinatorTrait;

#[derive(DependenciesStruct)]
pub struct LikeToggleCoordinator {
    auth_token_provider: DynAuthTokenProvider,
    photos_service: DynPhotosService,

    #[state]
    in_flight: Mutex<HashSet<PhotoId>>,
}

/// Removes the photo from the in-flight set when the toggle completes or its future is dropped.
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<PhotoId>>,
    photo_id: PhotoId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.photo_id);
    }
}

#[async_trait]
impl LikeToggleCoordinatorTrait for LikeToggleCoordinator {
    async fn toggle(
        &self,
        photo_id: &PhotoId,
        current_is_liked: bool,
    ) -> Result<(), RequestError> {
        let _guard = self.begin_toggle(photo_id)?;

        let Some(token) = self.auth_token_provider.current_token() else {
            return Err(RequestError::AuthRequired);
        };

        let is_liked = !current_is_liked;
        match self
            .photos_service
            .set_photo_liked(&token, photo_id, is_liked)
            .await
        {
            Ok(()) => {
                info!(
                    "{} photo {photo_id}.",
                    if is_liked { "Liked" } else { "Unliked" }
                );
                Ok(())
            }
            Err(err) => {
                warn!("Failed to toggle like of photo {photo_id}. {err}");
                Err(err)
            }
        }
    }

    fn is_toggling(&self, photo_id: &PhotoId) -> bool {
        self.in_flight.lock().contains(photo_id)
    }
}

impl LikeToggleCoordinator {
    fn begin_toggle(&self, photo_id: &PhotoId) -> Result<InFlightGuard<'_>, RequestError> {
        if !self.in_flight.lock().insert(photo_id.clone()) {
            return Err(RequestError::RequestAlreadyInFlight);
        }
        Ok(InFlightGuard {
            in_flight: &self.in_flight,
            photo_id: photo_id.clone(),
        })
    }
}
