// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::general::models::{HttpMethod, HttpRequest, HttpResponse};
use crate::domain::general::services::HttpClient;
use crate::domain::shared::models::RequestError;

/// `HttpClient` backed by reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    // Only the path is logged since query items may carry credentials.
    #[instrument(skip_all, fields(method = %request.method, path = request.url.path()))]
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "Received response.");
        Ok(HttpResponse::new(status, body))
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        RequestError::Transport {
            msg: value.without_url().to_string(),
        }
    }
}
