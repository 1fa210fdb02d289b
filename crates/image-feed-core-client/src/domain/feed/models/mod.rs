// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use feed_page::FeedPage;
pub use page_load_outcome::PageLoadOutcome;
pub use photo::{PixelSize, Photo, PhotoId};

mod feed_page;
mod page_load_outcome;
mod photo;
