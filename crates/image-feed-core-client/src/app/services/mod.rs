// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_service::AuthService;
pub use feed_service::FeedService;
pub use profile_service::ProfileService;

mod auth_service;
mod feed_service;
mod profile_service;
