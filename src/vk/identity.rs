use super::client::VkApi;
use super::models;
use crate::errors::{AppError, AppResult};

/// Map a user identifier to VK's numeric user ID.
///
/// All-digit identifiers are already numeric IDs and never reach the API.
/// Anything else is treated as a screen name and looked up with `users.get`.
pub async fn resolve_user_id(api: &dyn VkApi, identifier: &str) -> AppResult<i64> {
    if is_numeric_id(identifier) {
        return identifier
            .parse::<i64>()
            .map_err(|_| AppError::validation("user_id", "Numeric user ID is out of range"));
    }

    log::info!("Resolving screen name '{}' to a numeric ID", identifier);

    let body = api
        .call("users.get", &[("user_ids", identifier.to_string())])
        .await?;
    let users = models::decode_users(&body)?;

    let user = users
        .into_iter()
        .next()
        .ok_or_else(|| AppError::parse("users.get", "no user returned"))?;

    log::info!(
        "Resolved '{}' to user {} ({} {})",
        identifier,
        user.id,
        user.first_name.as_deref().unwrap_or(""),
        user.last_name.as_deref().unwrap_or("")
    );

    Ok(user.id)
}

fn is_numeric_id(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}
