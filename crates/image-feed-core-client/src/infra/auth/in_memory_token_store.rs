// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::auth::models::AccessToken;
use crate::domain::auth::repos::AuthTokenProvider;

/// Keeps the access token for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<AccessToken>>,
}

impl InMemoryTokenStore {
    pub fn new(token: Option<AccessToken>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }
}

impl AuthTokenProvider for InMemoryTokenStore {
    fn current_token(&self) -> Option<AccessToken> {
        self.token.read().clone()
    }

    fn store_token(&self, token: &AccessToken) -> Result<()> {
        self.token.write().replace(token.clone());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        self.token.write().take();
        Ok(())
    }
}
