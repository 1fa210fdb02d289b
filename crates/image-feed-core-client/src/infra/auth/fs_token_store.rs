// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::auth::models::AccessToken;
use crate::domain::auth::repos::AuthTokenProvider;

/// Persists the access token as a JSON file so that it survives restarts.
pub struct FsTokenStore {
    path: PathBuf,
    token: RwLock<Option<AccessToken>>,
}

#[derive(Serialize, Deserialize)]
struct TokenFile {
    access_token: String,
}

impl FsTokenStore {
    /// Opens the store at `path` and reads a previously saved token. A missing file means
    /// no token.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let token = match fs::read(&path) {
            Ok(contents) => {
                let file = serde_json::from_slice::<TokenFile>(&contents)
                    .with_context(|| format!("Failed to parse token file {}", path.display()))?;
                Some(AccessToken::from(file.access_token))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            token: RwLock::new(token),
        })
    }
}

impl AuthTokenProvider for FsTokenStore {
    fn current_token(&self) -> Option<AccessToken> {
        self.token.read().clone()
    }

    fn store_token(&self, token: &AccessToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_vec(&TokenFile {
            access_token: token.expose().to_string(),
        })?;
        fs::write(&self.path, contents)?;

        self.token.write().replace(token.clone());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        self.token.write().take();

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                warn!("Failed to delete token file {}. {err}", self.path.display());
                Err(err.into())
            }
        }
    }
}
