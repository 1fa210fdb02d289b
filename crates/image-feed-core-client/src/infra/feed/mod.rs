// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use photo_record::{PhotoRecord, PhotoUrlsRecord};

mod photo_record;
mod photos_service;
