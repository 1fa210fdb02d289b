// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use user_records::{MeRecord, ProfileImageRecord, UserRecord};

mod user_profile_service;
mod user_records;
