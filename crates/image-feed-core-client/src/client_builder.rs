// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, ClientCredentials, DynAuthTokenProvider,
    DynHttpClient,
};
use crate::app::event_handlers::ClientEventDispatcher;
use crate::client::ClientInner;
use crate::domain::auth::repos::AuthTokenProvider;
use crate::domain::general::services::HttpClient;
use crate::infra::general::ReqwestHttpClient;
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::services::{AuthService, FeedService, ProfileService};
use crate::{Client, ClientDelegate};

pub struct UndefinedCredentials;
pub struct UndefinedTokenStore;

pub struct ClientBuilder<C, T> {
    app_config: AppConfig,
    credentials: C,
    delegate: Option<Box<dyn ClientDelegate>>,
    http_client: DynHttpClient,
    token_store: T,
}

impl ClientBuilder<UndefinedCredentials, UndefinedTokenStore> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            credentials: UndefinedCredentials,
            delegate: None,
            http_client: Arc::new(ReqwestHttpClient::default()),
            token_store: UndefinedTokenStore,
        }
    }
}

impl<T> ClientBuilder<UndefinedCredentials, T> {
    pub fn set_credentials(
        self,
        credentials: ClientCredentials,
    ) -> ClientBuilder<ClientCredentials, T> {
        ClientBuilder {
            app_config: self.app_config,
            credentials,
            delegate: self.delegate,
            http_client: self.http_client,
            token_store: self.token_store,
        }
    }
}

impl<C> ClientBuilder<C, UndefinedTokenStore> {
    pub fn set_token_store<S: AuthTokenProvider + 'static>(
        self,
        token_store: S,
    ) -> ClientBuilder<C, DynAuthTokenProvider> {
        ClientBuilder {
            app_config: self.app_config,
            credentials: self.credentials,
            delegate: self.delegate,
            http_client: self.http_client,
            token_store: Arc::new(token_store),
        }
    }
}

impl<C, T> ClientBuilder<C, T> {
    pub fn set_http_client<H: HttpClient + 'static>(mut self, http_client: H) -> Self {
        self.http_client = Arc::new(http_client);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<ClientCredentials, DynAuthTokenProvider> {
    pub fn build(self) -> Client {
        let event_dispatcher = Arc::new(ClientEventDispatcher::new(
            self.delegate,
            self.app_config.event_channel_capacity,
        ));

        let dependencies: AppDependencies = PlatformDependencies {
            ctx: AppContext::new(self.app_config, self.credentials),
            auth_token_provider: self.token_store,
            client_event_dispatcher: event_dispatcher.clone(),
            http_client: self.http_client,
        }
        .into();

        let client_inner = Arc::new(ClientInner {
            auth: AuthService::from(&dependencies),
            feed: FeedService::from(&dependencies),
            profile: ProfileService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            event_dispatcher: event_dispatcher.clone(),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
