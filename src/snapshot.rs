use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::errors::AppResult;
use crate::vk::PhotoRecord;

/// Write the records as pretty JSON with 4-space indentation, replacing any
/// previous snapshot. Non-ASCII text is written as-is.
pub fn write_snapshot(path: &Path, records: &[PhotoRecord]) -> AppResult<()> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;

    fs::write(path, buffer)?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> AppResult<Vec<PhotoRecord>> {
    let contents = fs::read_to_string(path)?;
    let records = serde_json::from_str(&contents)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PhotoRecord> {
        vec![
            PhotoRecord {
                id: 10,
                url: "https://sun.userapi.com/фото.jpg".to_string(),
                like_count: 3,
                created_at: 1500000000,
            },
            PhotoRecord {
                id: 11,
                url: "https://sun.userapi.com/b.jpg".to_string(),
                like_count: 0,
                created_at: 1500000100,
            },
        ]
    }

    #[test]
    fn test_snapshot_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos_info.json");

        write_snapshot(&path, &sample()).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("[\n    {\n        \"id\": 10,"));
        assert!(text.contains("фото.jpg"), "non-ASCII must not be escaped");
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_snapshot_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos_info.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_snapshot(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(read_snapshot(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_snapshot_restores_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos_info.json");

        write_snapshot(&path, &sample()).unwrap();
        assert_eq!(read_snapshot(&path).unwrap(), sample());
    }

    #[test]
    fn test_read_snapshot_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_snapshot(&dir.path().join("absent.json")).is_err());
    }
}
