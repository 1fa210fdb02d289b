// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use http_client::{HttpClient, HttpClientExt};

mod http_client;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::http_client::MockHttpClient;
}
