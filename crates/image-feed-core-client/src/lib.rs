// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate};
pub use client_builder::{ClientBuilder, UndefinedCredentials, UndefinedTokenStore};
pub use client_event::{ClientEvent, FeedChange};
pub use domain::auth::repos::AuthTokenProvider;
pub use domain::general::models::{HttpMethod, HttpRequest, HttpResponse};
pub use domain::general::services::{HttpClient, HttpClientExt};

pub use app::deps::{AppConfig, ClientCredentials};
pub use app::dtos;
pub use app::services;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

pub mod infra;
