// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::{info, warn};
use url::Url;

use image_feed_proc_macros::DependenciesStruct;

use crate::app::deps::{DynAppContext, DynAuthTokenProvider, DynOAuthService};
use crate::domain::auth::models::{AccessToken, AuthError, AuthorizationCode, OAuthToken};
use crate::domain::auth::repos::AuthTokenProvider;
use crate::domain::shared::models::RequestError;

use super::super::AuthDomainService as AuthDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct AuthDomainService {
    ctx: DynAppContext,
    auth_token_provider: DynAuthTokenProvider,
    oauth_service: DynOAuthService,

    #[state]
    pending_exchange: Arc<Mutex<PendingExchange>>,
}

#[derive(Default)]
struct PendingExchange {
    last_request_id: u64,
    request: Option<PendingRequest>,
}

struct PendingRequest {
    id: u64,
    code: AuthorizationCode,
    task: AbortHandle,
}

#[async_trait]
impl AuthDomainServiceTrait for AuthDomainService {
    fn authorization_url(&self) -> Result<Url, AuthError> {
        let config = &self.ctx.config;
        let mut url = config.authorize_url.clone();

        url.query_pairs_mut()
            .append_pair("client_id", &self.ctx.credentials.access_key)
            .append_pair("redirect_uri", &config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &config.access_scope.join(" "));

        Ok(url)
    }

    async fn exchange_code(&self, code: &AuthorizationCode) -> Result<AccessToken, AuthError> {
        let (request_id, task) = {
            let mut pending = self.pending_exchange.lock();

            if let Some(request) = pending.request.take() {
                if &request.code == code {
                    pending.request = Some(request);
                    return Err(AuthError::RequestAlreadyInFlight);
                }
                info!("Cancelling token request superseded by a new authorization code.");
                request.task.abort();
            }

            pending.last_request_id += 1;
            let request_id = pending.last_request_id;

            let oauth_service = self.oauth_service.clone();
            let auth_token_provider = self.auth_token_provider.clone();
            let pending_exchange = self.pending_exchange.clone();
            let owned_code = code.clone();

            // Runs to completion even if the caller stops waiting.
            let task = tokio::spawn(async move {
                let result = match oauth_service.request_access_token(&owned_code).await {
                    Ok(token) => store_token(auth_token_provider.as_ref(), token),
                    Err(err) => {
                        warn!("Failed to exchange authorization code. {err}");
                        Err(err.into())
                    }
                };
                pending_exchange.lock().finish(request_id);
                result
            });

            pending.request = Some(PendingRequest {
                id: request_id,
                code: code.clone(),
                task: task.abort_handle(),
            });

            (request_id, task)
        };

        match task.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(AuthError::Cancelled),
            Err(err) => {
                self.pending_exchange.lock().finish(request_id);
                Err(RequestError::Transport {
                    msg: err.to_string(),
                }
                .into())
            }
        }
    }
}

impl PendingExchange {
    fn finish(&mut self, request_id: u64) {
        if self.request.as_ref().map(|r| r.id) == Some(request_id) {
            self.request = None;
        }
    }
}

fn store_token(
    auth_token_provider: &dyn AuthTokenProvider,
    token: OAuthToken,
) -> Result<AccessToken, AuthError> {
    auth_token_provider
        .store_token(&token.access_token)
        .map_err(|err| AuthError::Storage {
            msg: err.to_string(),
        })?;

    info!(
        "Obtained access token for {}.",
        token.username.as_deref().unwrap_or("<unknown user>")
    );
    Ok(token.access_token)
}
