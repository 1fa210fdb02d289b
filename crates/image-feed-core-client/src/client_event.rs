// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::feed::models::{Photo, PhotoId};
use crate::domain::shared::models::RequestError;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The contents of the feed have changed.
    FeedChanged { change: FeedChange },

    /// A page of the feed could not be loaded, not even after retrying.
    FeedLoadFailed { page: u32, error: RequestError },

    /// The profile of the signed-in user was loaded.
    ProfileChanged,

    /// The avatar of the signed-in user was loaded.
    AvatarChanged { url: String },

    /// The user signed in or out.
    AuthStatusChanged { is_authenticated: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedChange {
    /// Photos were appended to the end of the feed. May be empty if the loaded page contained
    /// only photos that were part of the feed already.
    Appended { photos: Vec<Photo> },

    /// The like status of a photo changed.
    PhotoUpdated { id: PhotoId },

    /// The feed was emptied.
    Reset,
}
