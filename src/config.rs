use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_VK_API_VERSION: &str = "5.131";
pub const DEFAULT_VK_API_BASE_URL: &str = "https://api.vk.com/method";
pub const DEFAULT_DISK_BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk";
pub const DEFAULT_UPLOAD_FOLDER: &str = "VK_Photos";
pub const DEFAULT_SNAPSHOT_PATH: &str = "photos_info.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub vk_token: String,
    pub yandex_token: String,
    pub vk_api_version: String,
    pub vk_api_base_url: String,
    pub disk_base_url: String,
    pub upload_folder: String,
    pub snapshot_path: PathBuf,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Build the configuration from the process environment, after loading
    /// any `.env` file in the working directory.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vk_token = required(&lookup, "VK_TOKEN")?;
        let yandex_token = required(&lookup, "YANDEX_TOKEN")?;

        let request_timeout = match optional(&lookup, "REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::validation("REQUEST_TIMEOUT_SECS", "Must be a whole number of seconds")
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let config = Self {
            vk_token,
            yandex_token,
            vk_api_version: optional(&lookup, "VK_API_VERSION")
                .unwrap_or_else(|| DEFAULT_VK_API_VERSION.to_string()),
            vk_api_base_url: optional(&lookup, "VK_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_VK_API_BASE_URL.to_string()),
            disk_base_url: optional(&lookup, "YANDEX_DISK_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DISK_BASE_URL.to_string()),
            upload_folder: optional(&lookup, "UPLOAD_FOLDER")
                .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string()),
            snapshot_path: optional(&lookup, "SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            request_timeout,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

fn required<F>(lookup: &F, key: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or_else(|| {
        AppError::Config(format!(
            "{} is not set. Add it to the environment or to a .env file",
            key
        ))
    })
}

// Blank values count as unset.
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn validate_config(config: &Config) -> AppResult<()> {
    crate::security::InputValidator::validate_folder_name(&config.upload_folder)?;

    if config.vk_api_version.is_empty() {
        return Err(AppError::validation("VK_API_VERSION", "Must not be empty"));
    }

    for (field, url) in [
        ("VK_API_BASE_URL", &config.vk_api_base_url),
        ("YANDEX_DISK_BASE_URL", &config.disk_base_url),
    ] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::validation(field, "Must be an http(s) URL"));
        }
    }

    if config.snapshot_path.as_os_str().is_empty() {
        return Err(AppError::validation("SNAPSHOT_PATH", "Must not be empty"));
    }

    if config.request_timeout == Some(Duration::ZERO) {
        return Err(AppError::validation(
            "REQUEST_TIMEOUT_SECS",
            "Must be greater than 0",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            Config::from_lookup(lookup_from(&[("VK_TOKEN", "vk"), ("YANDEX_TOKEN", "ya")]))
                .unwrap();

        assert_eq!(config.vk_token, "vk");
        assert_eq!(config.yandex_token, "ya");
        assert_eq!(config.vk_api_version, "5.131");
        assert_eq!(config.upload_folder, "VK_Photos");
        assert_eq!(config.snapshot_path, PathBuf::from("photos_info.json"));
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_missing_vk_token_fails_fast() {
        let result = Config::from_lookup(lookup_from(&[("YANDEX_TOKEN", "ya")]));

        match result {
            Err(AppError::Config(message)) => assert!(message.contains("VK_TOKEN")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_yandex_token_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[("VK_TOKEN", "vk"), ("YANDEX_TOKEN", "  ")]));

        match result {
            Err(AppError::Config(message)) => assert!(message.contains("YANDEX_TOKEN")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides_and_timeout() {
        let config = Config::from_lookup(lookup_from(&[
            ("VK_TOKEN", "vk"),
            ("YANDEX_TOKEN", "ya"),
            ("UPLOAD_FOLDER", "Backups/VK"),
            ("SNAPSHOT_PATH", "/tmp/snapshot.json"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.upload_folder, "Backups/VK");
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/snapshot.json"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let bad_timeout = Config::from_lookup(lookup_from(&[
            ("VK_TOKEN", "vk"),
            ("YANDEX_TOKEN", "ya"),
            ("REQUEST_TIMEOUT_SECS", "0"),
        ]));
        assert!(matches!(bad_timeout, Err(AppError::Validation { .. })));

        let bad_folder = Config::from_lookup(lookup_from(&[
            ("VK_TOKEN", "vk"),
            ("YANDEX_TOKEN", "ya"),
            ("UPLOAD_FOLDER", "../escape"),
        ]));
        assert!(matches!(bad_folder, Err(AppError::Validation { .. })));

        let bad_url = Config::from_lookup(lookup_from(&[
            ("VK_TOKEN", "vk"),
            ("YANDEX_TOKEN", "ya"),
            ("VK_API_BASE_URL", "api.vk.com/method"),
        ]));
        assert!(matches!(bad_url, Err(AppError::Validation { .. })));
    }
}
