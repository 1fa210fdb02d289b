// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::de::DeserializeOwned;
use url::Url;

use crate::app::deps::{DynAppContext, DynHttpClient};
use crate::domain::auth::models::AccessToken;
use crate::domain::general::models::HttpRequest;
use crate::domain::general::services::HttpClientExt;
use crate::domain::shared::models::RequestError;

/// Talks to the Unsplash REST API. Implements the remote services of the domain layer.
#[derive(Clone)]
pub struct UnsplashApiClient {
    pub(crate) http_client: DynHttpClient,
    pub(crate) ctx: DynAppContext,
}

impl UnsplashApiClient {
    pub fn new(http_client: DynHttpClient, ctx: DynAppContext) -> Self {
        Self { http_client, ctx }
    }

    /// Appends `segments` to the path of the API base URL. Each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, RequestError> {
        let mut url = self.ctx.config.api_base_url.clone();
        let invalid_base = || RequestError::Transport {
            msg: "API base URL cannot have path segments".to_string(),
        };

        url.path_segments_mut()
            .map_err(|_| invalid_base())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned + Send>(
        &self,
        token: &AccessToken,
        url: Url,
    ) -> Result<T, RequestError> {
        self.http_client
            .request_decoded(HttpRequest::get(url).with_bearer_token(token))
            .await
    }
}
