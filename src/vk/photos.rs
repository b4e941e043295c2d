use std::path::Path;

use serde::{Deserialize, Serialize};

use super::client::VkApi;
use super::models::{self, PhotoItem, PhotoSize};
use crate::errors::{AppError, AppResult};
use crate::snapshot;

/// One profile photo, reduced to what the backup needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: i64,
    /// URL of the widest rendition VK offers.
    pub url: String,
    #[serde(rename = "likes")]
    pub like_count: i64,
    /// Upload time, Unix seconds.
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl PhotoRecord {
    pub fn from_item(item: &PhotoItem) -> AppResult<Self> {
        let largest = select_largest(&item.sizes).ok_or_else(|| {
            AppError::parse(
                "photos.get",
                &format!("photo {} has no size variants", item.id),
            )
        })?;

        Ok(Self {
            id: item.id,
            url: largest.url.clone(),
            like_count: item.likes.count,
            created_at: item.date,
        })
    }
}

/// Pick the widest size variant. On equal widths the earliest entry wins.
pub fn select_largest(sizes: &[PhotoSize]) -> Option<&PhotoSize> {
    let mut largest: Option<&PhotoSize> = None;
    for size in sizes {
        match largest {
            Some(current) if size.width <= current.width => {}
            _ => largest = Some(size),
        }
    }
    largest
}

/// Fetch the owner's profile album and write the snapshot file.
///
/// `owner_id` is passed to VK as-is, sign included.
pub async fn collect_photos(
    api: &dyn VkApi,
    owner_id: i64,
    snapshot_path: &Path,
) -> AppResult<Vec<PhotoRecord>> {
    let params = [
        ("owner_id", owner_id.to_string()),
        ("album_id", "profile".to_string()),
        ("extended", "1".to_string()),
        ("photo_sizes", "1".to_string()),
    ];

    let body = api.call("photos.get", &params).await?;
    let list = models::decode_photos(&body)?;

    log::info!(
        "VK returned {} profile photos for owner {}",
        list.items.len(),
        owner_id
    );

    let records = list
        .items
        .iter()
        .map(PhotoRecord::from_item)
        .collect::<AppResult<Vec<_>>>()?;

    snapshot::write_snapshot(snapshot_path, &records)?;
    log::info!("Photo metadata saved to {}", snapshot_path.display());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, url: &str) -> PhotoSize {
        PhotoSize {
            kind: None,
            width,
            height: None,
            url: url.to_string(),
        }
    }

    #[test]
    fn test_select_largest_picks_widest() {
        let sizes = vec![size(100, "A"), size(800, "B"), size(400, "C")];
        assert_eq!(select_largest(&sizes).unwrap().url, "B");
    }

    #[test]
    fn test_select_largest_first_maximal_wins() {
        let sizes = vec![size(604, "first"), size(604, "second"), size(130, "small")];
        assert_eq!(select_largest(&sizes).unwrap().url, "first");
    }

    #[test]
    fn test_select_largest_empty() {
        assert!(select_largest(&[]).is_none());
    }

    #[test]
    fn test_record_from_item_without_sizes_fails() {
        let item = PhotoItem {
            id: 7,
            date: 1,
            sizes: vec![],
            likes: models::Likes { count: 0 },
        };

        assert!(matches!(
            PhotoRecord::from_item(&item),
            Err(AppError::Parse { .. })
        ));
    }

    #[test]
    fn test_record_serializes_with_snapshot_field_names() {
        let record = PhotoRecord {
            id: 1,
            url: "https://example.com/p.jpg".to_string(),
            like_count: 5,
            created_at: 1600000000,
        };

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(value["likes"], 5);
        assert_eq!(value["date"], 1600000000);
    }
}
