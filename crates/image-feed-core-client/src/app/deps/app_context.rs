// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::time::Duration;

use parking_lot::RwLock;
use secrecy::Secret;
use url::Url;

use crate::domain::user_profiles::models::UserProfile;

pub struct AppConfig {
    /// Base URL of the REST API.
    pub api_base_url: Url,
    /// The page the user grants access on.
    pub authorize_url: Url,
    /// Endpoint that exchanges an authorization code for an access token.
    pub token_url: Url,
    pub redirect_uri: String,
    pub access_scope: Vec<String>,
    /// The number of photos requested per feed page.
    pub photos_per_page: u32,
    /// How long to wait before retrying a failed feed page.
    pub page_retry_delay: Duration,
    /// Capacity of the channel behind `Client::subscribe`.
    pub event_channel_capacity: usize,
}

/// The API keys identifying the application.
pub struct ClientCredentials {
    pub access_key: String,
    pub secret_key: Secret<String>,
}

pub struct AppContext {
    pub config: AppConfig,
    pub credentials: ClientCredentials,
    pub profile: RwLock<Option<UserProfile>>,
    pub avatar_url: RwLock<Option<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig, credentials: ClientCredentials) -> Self {
        Self {
            config,
            credentials,
            profile: Default::default(),
            avatar_url: Default::default(),
        }
    }
}

impl AppContext {
    pub fn profile(&self) -> Option<UserProfile> {
        self.profile.read().clone()
    }

    pub fn set_profile(&self, profile: UserProfile) {
        self.profile.write().replace(profile);
    }

    pub fn avatar_url(&self) -> Option<String> {
        self.avatar_url.read().clone()
    }

    pub fn set_avatar_url(&self, url: String) {
        self.avatar_url.write().replace(url);
    }

    pub fn reset_user_data(&self) {
        self.profile.write().take();
        self.avatar_url.write().take();
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: parse_static_url("https://api.unsplash.com"),
            authorize_url: parse_static_url("https://unsplash.com/oauth/authorize"),
            token_url: parse_static_url("https://unsplash.com/oauth/token"),
            redirect_uri: "urn:ietf:wg:oauth:2.0:oob".to_string(),
            access_scope: vec![
                "public".to_string(),
                "read_user".to_string(),
                "write_likes".to_string(),
            ],
            photos_per_page: 10,
            page_retry_delay: Duration::from_secs(2),
            event_channel_capacity: 64,
        }
    }
}

impl ClientCredentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: Secret::new(secret_key.into()),
        }
    }
}

impl Debug for ClientCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

fn parse_static_url(url: &str) -> Url {
    Url::parse(url).expect("Hardcoded URL must be valid")
}
