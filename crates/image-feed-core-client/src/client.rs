// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::app::deps::{AppConfig, DynAppContext};
use crate::app::event_handlers::ClientEventDispatcher;
use crate::client_builder::{ClientBuilder, UndefinedCredentials, UndefinedTokenStore};
use crate::services::{AuthService, FeedService, ProfileService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedCredentials, UndefinedTokenStore> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub auth: AuthService,
    pub feed: FeedService,
    pub profile: ProfileService,
    pub(crate) ctx: DynAppContext,
    pub(crate) event_dispatcher: Arc<ClientEventDispatcher>,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Returns a receiver for all events emitted from now on. A receiver that falls behind by
    /// more than `AppConfig::event_channel_capacity` events skips the oldest ones.
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.event_dispatcher.subscribe()
    }

    pub fn config(&self) -> &AppConfig {
        &self.ctx.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }
}
