// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use image_feed_utils::id_string;

id_string!(PhotoId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub size: PixelSize,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub thumbnail_url: String,
    pub full_url: String,
    /// Only ever changed after the server confirmed a like/unlike.
    pub is_liked: bool,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height divided by width, `None` for a zero width.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 {
            return None;
        }
        Some(f64::from(self.height) / f64::from(self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(PixelSize::new(4000, 3000).aspect_ratio(), Some(0.75));
        assert_eq!(PixelSize::new(0, 3000).aspect_ratio(), None);
    }
}
