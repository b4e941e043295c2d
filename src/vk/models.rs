// Response schemas for the VK methods used by the backup.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

/// Every VK method answers with either `response` or `error`.
#[derive(Debug, Deserialize)]
pub struct VkEnvelope<T> {
    pub response: Option<T>,
    pub error: Option<VkError>,
}

#[derive(Debug, Deserialize)]
pub struct VkError {
    #[serde(default)]
    pub error_code: i64,
    pub error_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct VkUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoList {
    #[serde(default)]
    pub count: Option<u64>,
    pub items: Vec<PhotoItem>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoItem {
    pub id: i64,
    pub date: i64,
    pub sizes: Vec<PhotoSize>,
    pub likes: Likes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSize {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub width: u32,
    #[serde(default)]
    pub height: Option<u32>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Likes {
    pub count: i64,
}

/// Decode a VK reply body, turning an `error` object into
/// [`AppError::UpstreamApi`] and a malformed body into [`AppError::Parse`].
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> AppResult<T> {
    let envelope: VkEnvelope<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| AppError::parse(endpoint, &format!("body is not a JSON object: {}", e)))?;

    if let Some(error) = envelope.error {
        return Err(AppError::UpstreamApi {
            code: error.error_code,
            message: error.error_msg,
        });
    }

    let response = envelope
        .response
        .ok_or_else(|| AppError::parse(endpoint, "missing `response` field"))?;

    serde_json::from_value(response).map_err(|e| AppError::parse(endpoint, &e.to_string()))
}

pub fn decode_users(body: &str) -> AppResult<Vec<VkUser>> {
    decode("users.get", body)
}

pub fn decode_photos(body: &str) -> AppResult<PhotoList> {
    decode("photos.get", body)
}
