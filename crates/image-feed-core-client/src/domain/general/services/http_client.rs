// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::general::models::{HttpRequest, HttpResponse};
use crate::domain::shared::models::RequestError;

/// Transport used for every call against the remote API.
///
/// Implementations only report transport failures. Non-2xx responses are returned as
/// `HttpResponse` and classified by the caller (see `HttpClientExt::request_decoded` and
/// `HttpResponse::error_for_status`).
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait HttpClient: Send + Sync {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}

#[async_trait]
pub trait HttpClientExt: HttpClient {
    /// Sends `request`, fails with `RequestError::HttpStatus` for non-2xx responses and decodes
    /// the JSON body into `T`.
    async fn request_decoded<T: DeserializeOwned + Send>(
        &self,
        request: HttpRequest,
    ) -> Result<T, RequestError>;
}

#[async_trait]
impl<C: HttpClient + ?Sized> HttpClientExt for C {
    async fn request_decoded<T: DeserializeOwned + Send>(
        &self,
        request: HttpRequest,
    ) -> Result<T, RequestError> {
        self.request(request).await?.error_for_status()?.json()
    }
}
