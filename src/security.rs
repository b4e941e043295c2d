use regex::Regex;
use std::sync::OnceLock;

use crate::errors::{AppError, AppResult};

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s\p{Cc}]+$").expect("static regex"))
}

pub struct InputValidator;

impl InputValidator {
    /// Trim and check a user identifier typed at the prompt. Returns the
    /// trimmed value.
    pub fn validate_user_identifier(raw: &str) -> AppResult<String> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::validation("user_id", "User ID cannot be empty"));
        }

        if trimmed.len() > 64 {
            return Err(AppError::validation(
                "user_id",
                "User ID too long (max 64 characters)",
            ));
        }

        if !identifier_pattern().is_match(trimmed) {
            return Err(AppError::validation(
                "user_id",
                "User ID must not contain spaces or control characters",
            ));
        }

        Ok(trimmed.to_string())
    }

    pub fn validate_folder_name(name: &str) -> AppResult<()> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(AppError::validation("folder", "Folder name cannot be empty"));
        }

        if trimmed.len() > 255 {
            return Err(AppError::validation("folder", "Folder name too long"));
        }

        // Check for path traversal attempts
        if trimmed.split('/').any(|segment| segment == "..") {
            return Err(AppError::validation("folder", "Invalid folder path detected"));
        }

        if trimmed.chars().any(|c| c.is_control()) {
            return Err(AppError::validation(
                "folder",
                "Folder name contains control characters",
            ));
        }

        Ok(())
    }
}
