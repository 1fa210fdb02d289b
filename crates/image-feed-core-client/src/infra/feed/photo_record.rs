// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::feed::models::{Photo, PhotoId, PixelSize};

/// A photo as returned by `GET /photos`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub created_at: Option<String>,
    pub width: u32,
    pub height: u32,
    pub description: Option<String>,
    pub liked_by_user: bool,
    pub urls: PhotoUrlsRecord,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoUrlsRecord {
    pub thumb: String,
    pub full: String,
}

impl From<PhotoRecord> for Photo {
    fn from(value: PhotoRecord) -> Self {
        Photo {
            id: PhotoId::from(value.id),
            size: PixelSize::new(value.width, value.height),
            created_at: value
                .created_at
                .as_deref()
                .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
                .map(|date| date.with_timezone(&Utc)),
            description: value.description,
            thumbnail_url: value.urls.thumb,
            full_url: value.urls.full,
            is_liked: value.liked_by_user,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_maps_record() {
        let record = serde_json::from_value::<PhotoRecord>(json!({
            "id": "LBI7cgq3pbM",
            "created_at": "2016-05-03T11:00:28-04:00",
            "width": 5245,
            "height": 3497,
            "color": "#60544D",
            "description": "A man drinking a coffee.",
            "liked_by_user": true,
            "urls": {
                "raw": "https://images.unsplash.com/raw",
                "full": "https://images.unsplash.com/full",
                "regular": "https://images.unsplash.com/regular",
                "thumb": "https://images.unsplash.com/thumb"
            }
        }))
        .unwrap();

        assert_eq!(
            Photo::from(record),
            Photo {
                id: "LBI7cgq3pbM".into(),
                size: PixelSize::new(5245, 3497),
                created_at: Some(Utc.with_ymd_and_hms(2016, 5, 3, 15, 0, 28).unwrap()),
                description: Some("A man drinking a coffee.".to_string()),
                thumbnail_url: "https://images.unsplash.com/thumb".to_string(),
                full_url: "https://images.unsplash.com/full".to_string(),
                is_liked: true,
            }
        );
    }

    #[test]
    fn test_ignores_malformed_date() {
        let record = serde_json::from_value::<PhotoRecord>(json!({
            "id": "abc",
            "created_at": "yesterday",
            "width": 100,
            "height": 100,
            "description": null,
            "liked_by_user": false,
            "urls": { "thumb": "t", "full": "f" }
        }))
        .unwrap();

        assert_eq!(Photo::from(record).created_at, None);
    }
}
