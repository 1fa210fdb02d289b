// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};

use image_feed_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynAuthTokenProvider, DynClientEventDispatcher, DynPhotosService,
};
use crate::domain::feed::models::{FeedPage, PageLoadOutcome, Photo, PhotoId};
use crate::domain::shared::models::RequestError;
use crate::{ClientEvent, FeedChange};

use super::super::FeedSyncEngine as FeedSyncEngineTrait;

#[derive(Clone, DependenciesStruct)]
pub struct FeedSyncEngine {
    ctx: DynAppContext,
    auth_token_provider: DynAuthTokenProvider,
    client_event_dispatcher: DynClientEventDispatcher,
    photos_service: DynPhotosService,

    #[state]
    state: Arc<Mutex<FeedState>>,
}

#[derive(Default)]
struct FeedState {
    photos: Vec<Photo>,
    photo_ids: HashSet<PhotoId>,
    last_loaded_page: Option<u32>,
    fetch: FetchState,
    scheduled_retry: Option<AbortHandle>,
    /// Incremented on every reset. Fetches started in an older generation are dropped.
    generation: u64,
}

#[derive(Default)]
enum FetchState {
    #[default]
    Idle,
    Fetching {
        task: Option<AbortHandle>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    Retry,
}

#[derive(Debug, Clone, Copy)]
struct FetchTicket {
    page: FeedPage,
    generation: u64,
}

#[async_trait]
impl FeedSyncEngineTrait for FeedSyncEngine {
    async fn load_next_page(&self) -> PageLoadOutcome {
        let (ticket, task) = {
            let mut state = self.state.lock();

            if state.is_fetching() {
                debug!("Ignoring request to load the next page. A page is being fetched already.");
                return PageLoadOutcome::Ignored;
            }

            if let Some(retry) = state.scheduled_retry.take() {
                debug!("Cancelling scheduled retry in favor of a new request.");
                retry.abort();
            }

            let ticket = state.begin_fetch(self.ctx.config.photos_per_page);
            let engine = self.clone();
            let task = tokio::spawn(async move { engine.fetch(ticket, Attempt::Initial).await });
            state.fetch = FetchState::Fetching {
                task: Some(task.abort_handle()),
            };

            (ticket, task)
        };

        // The task merges the page on its own if this future is dropped.
        match task.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => {
                debug!("Loading page {} was cancelled.", ticket.page.number);
                PageLoadOutcome::Discarded {
                    page: ticket.page.number,
                }
            }
            Err(err) => {
                self.state.lock().finish_fetch(&ticket);
                error!("Loading page {} failed unexpectedly. {err}", ticket.page.number);
                PageLoadOutcome::Failed {
                    page: ticket.page.number,
                    error: RequestError::Transport {
                        msg: err.to_string(),
                    },
                }
            }
        }
    }

    fn current_photos(&self) -> Vec<Photo> {
        self.state.lock().photos.clone()
    }

    fn photo(&self, photo_id: &PhotoId) -> Option<Photo> {
        self.state
            .lock()
            .photos
            .iter()
            .find(|photo| &photo.id == photo_id)
            .cloned()
    }

    fn last_loaded_page(&self) -> Option<u32> {
        self.state.lock().last_loaded_page
    }

    fn is_fetching(&self) -> bool {
        self.state.lock().is_fetching()
    }

    fn reset(&self) {
        self.state.lock().reset();
        info!("Feed was reset.");

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FeedChanged {
                change: FeedChange::Reset,
            });
    }

    fn apply_like_result(&self, photo_id: &PhotoId, is_liked: bool) -> bool {
        let did_update = {
            let mut state = self.state.lock();
            match state.photos.iter_mut().find(|photo| &photo.id == photo_id) {
                Some(photo) => {
                    photo.is_liked = is_liked;
                    true
                }
                None => false,
            }
        };

        if !did_update {
            debug!("Ignoring like result for photo {photo_id} which is not part of the feed.");
            return false;
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FeedChanged {
                change: FeedChange::PhotoUpdated {
                    id: photo_id.clone(),
                },
            });
        true
    }
}

impl FeedSyncEngine {
    async fn fetch(&self, ticket: FetchTicket, attempt: Attempt) -> PageLoadOutcome {
        let page = ticket.page;

        let Some(token) = self.auth_token_provider.current_token() else {
            self.state.lock().finish_fetch(&ticket);
            warn!("Cannot load page {} without an access token.", page.number);
            return self.fail(page, RequestError::AuthRequired);
        };

        debug!("Loading page {} of the feed…", page.number);

        match self.photos_service.load_photos(&token, &page).await {
            Ok(photos) => self.merge(ticket, photos),
            Err(error) => self.handle_failure(ticket, attempt, error),
        }
    }

    async fn retry(&self, ticket: FetchTicket) {
        let Some(ticket) = self.state.lock().begin_retry(&ticket) else {
            debug!("Skipping scheduled retry of page {}.", ticket.page.number);
            return;
        };

        info!("Retrying page {} of the feed…", ticket.page.number);
        // Reported via events.
        _ = self.fetch(ticket, Attempt::Retry).await;
    }

    fn merge(&self, ticket: FetchTicket, photos: Vec<Photo>) -> PageLoadOutcome {
        let page = ticket.page.number;
        let received_count = photos.len();

        let appended = {
            let mut state = self.state.lock();
            if !state.finish_fetch(&ticket) {
                return PageLoadOutcome::Discarded { page };
            }
            let appended = state.append_unseen(photos);
            state.last_loaded_page = Some(page);
            appended
        };

        let appended_count = appended.len();
        info!("Loaded page {page} of the feed. {appended_count} of {received_count} photos are new.");

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FeedChanged {
                change: FeedChange::Appended { photos: appended },
            });

        PageLoadOutcome::Merged {
            page,
            appended: appended_count,
        }
    }

    fn handle_failure(
        &self,
        ticket: FetchTicket,
        attempt: Attempt,
        error: RequestError,
    ) -> PageLoadOutcome {
        let page = ticket.page.number;

        match attempt {
            Attempt::Initial => {
                let delay = self.ctx.config.page_retry_delay;
                let mut state = self.state.lock();
                if !state.finish_fetch(&ticket) {
                    return PageLoadOutcome::Discarded { page };
                }
                warn!("Failed to load page {page} of the feed. Retrying in {delay:?}. {error}");
                state.scheduled_retry = Some(self.schedule_retry(ticket, delay));
                PageLoadOutcome::RetryScheduled { page }
            }
            Attempt::Retry => {
                if !self.state.lock().finish_fetch(&ticket) {
                    return PageLoadOutcome::Discarded { page };
                }
                error!("Failed to load page {page} of the feed after retrying. {error}");
                self.fail(ticket.page, error)
            }
        }
    }

    fn schedule_retry(&self, ticket: FetchTicket, delay: Duration) -> AbortHandle {
        let engine = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            engine.retry(ticket).await;
        })
        .abort_handle()
    }

    fn fail(&self, page: FeedPage, error: RequestError) -> PageLoadOutcome {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FeedLoadFailed {
                page: page.number,
                error: error.clone(),
            });

        PageLoadOutcome::Failed {
            page: page.number,
            error,
        }
    }
}

impl FeedState {
    fn is_fetching(&self) -> bool {
        matches!(self.fetch, FetchState::Fetching { .. })
    }

    fn begin_fetch(&mut self, page_size: u32) -> FetchTicket {
        self.fetch = FetchState::Fetching { task: None };
        FetchTicket {
            page: FeedPage::following(self.last_loaded_page, page_size),
            generation: self.generation,
        }
    }

    /// Starts the scheduled retry of `ticket` unless the feed was reset, another fetch is
    /// running or the page has been loaded in the meantime. The retry task becomes the fetch
    /// task so that `reset` can abort it.
    fn begin_retry(&mut self, ticket: &FetchTicket) -> Option<FetchTicket> {
        if self.generation != ticket.generation || self.is_fetching() {
            return None;
        }
        let retry_task = self.scheduled_retry.take();

        if FeedPage::following(self.last_loaded_page, ticket.page.size) != ticket.page {
            return None;
        }

        let ticket = self.begin_fetch(ticket.page.size);
        self.fetch = FetchState::Fetching { task: retry_task };
        Some(ticket)
    }

    /// Returns `false` if the fetch belongs to a generation that has been reset.
    fn finish_fetch(&mut self, ticket: &FetchTicket) -> bool {
        if self.generation != ticket.generation {
            return false;
        }
        self.fetch = FetchState::Idle;
        true
    }

    fn append_unseen(&mut self, photos: Vec<Photo>) -> Vec<Photo> {
        let appended = photos
            .into_iter()
            .filter(|photo| self.photo_ids.insert(photo.id.clone()))
            .collect::<Vec<_>>();
        self.photos.extend(appended.iter().cloned());
        appended
    }

    fn reset(&mut self) {
        if let FetchState::Fetching { task: Some(task) } = &self.fetch {
            task.abort();
        }
        if let Some(retry) = self.scheduled_retry.take() {
            retry.abort();
        }

        *self = FeedState {
            generation: self.generation + 1,
            ..Default::default()
        };
    }
}
