// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use tokio::sync::broadcast;
use tracing::warn;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::{ClientDelegate, ClientEvent};

/// Forwards events to the delegate and to every subscriber of `Client::subscribe`.
pub struct ClientEventDispatcher {
    client: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
    subscribers: broadcast::Sender<ClientEvent>,
}

impl ClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>, channel_capacity: usize) -> Self {
        let (subscribers, _) = broadcast::channel(channel_capacity.max(1));
        Self {
            client: Default::default(),
            delegate,
            subscribers,
        }
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client.set(client_inner).is_err() {
            warn!("ClientInner was already set on ClientEventDispatcher.");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.subscribers.subscribe()
    }
}

impl ClientEventDispatcherTrait for ClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        if self.subscribers.receiver_count() > 0 {
            // Fails only if all receivers were dropped in the meantime.
            _ = self.subscribers.send(event.clone());
        }

        let Some(ref delegate) = self.delegate else {
            return;
        };

        let Some(client_inner) = self.client.get().and_then(Weak::upgrade) else {
            return;
        };

        delegate.handle_event(client_inner.into(), event)
    }
}
