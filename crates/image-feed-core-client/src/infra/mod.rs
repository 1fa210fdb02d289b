// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod api;
pub mod auth;
pub mod feed;
pub mod general;
pub(crate) mod platform_dependencies;
pub mod user_profile;
