// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::domain::auth::models::{AuthorizationCode, OAuthToken};
use crate::domain::auth::services::OAuthService;
use crate::domain::general::models::HttpRequest;
use crate::domain::general::services::HttpClientExt;
use crate::domain::shared::models::RequestError;
use crate::infra::api::UnsplashApiClient;
use crate::infra::auth::OAuthTokenRecord;

#[async_trait]
impl OAuthService for UnsplashApiClient {
    #[instrument(skip_all)]
    async fn request_access_token(
        &self,
        code: &AuthorizationCode,
    ) -> Result<OAuthToken, RequestError> {
        let mut url = self.ctx.config.token_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.ctx.credentials.access_key)
            .append_pair(
                "client_secret",
                self.ctx.credentials.secret_key.expose_secret(),
            )
            .append_pair("redirect_uri", &self.ctx.config.redirect_uri)
            .append_pair("code", code.as_str())
            .append_pair("grant_type", "authorization_code");

        let record = self
            .http_client
            .request_decoded::<OAuthTokenRecord>(HttpRequest::post(url))
            .await?;
        Ok(record.into())
    }
}
