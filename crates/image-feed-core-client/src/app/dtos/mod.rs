// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use crate::domain::{
    auth::models::{AccessToken, AuthError, AuthorizationCode},
    feed::models::{FeedPage, PageLoadOutcome, Photo, PhotoId, PixelSize},
    shared::models::RequestError,
    user_profiles::models::UserProfile,
};
