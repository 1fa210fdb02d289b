// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::feed::models::{Photo, PhotoId, PixelSize};

pub struct PhotoBuilder {
    id: PhotoId,
    is_liked: bool,
}

impl PhotoBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: PhotoId::from(id.into()),
            is_liked: false,
        }
    }

    pub fn set_is_liked(mut self, is_liked: bool) -> Self {
        self.is_liked = is_liked;
        self
    }

    pub fn build(self) -> Photo {
        Photo {
            size: PixelSize::new(4000, 3000),
            created_at: None,
            description: Some(format!("Photo {}", self.id)),
            thumbnail_url: format!("https://images.unsplash.com/{}/thumb", self.id),
            full_url: format!("https://images.unsplash.com/{}/full", self.id),
            is_liked: self.is_liked,
            id: self.id,
        }
    }
}

impl From<PhotoBuilder> for Photo {
    fn from(value: PhotoBuilder) -> Self {
        value.build()
    }
}
