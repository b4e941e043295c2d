use crate::config::Config;
use crate::errors::AppResult;
use crate::security::InputValidator;
use crate::uploader::{self, DiskApi, UploadProgress};
use crate::vk::{self, VkApi};

/// Run one backup: resolve the user, collect and snapshot their profile
/// photos, then push them to the configured folder.
///
/// Errors before the upload stage abort the run. Folder and per-photo
/// failures are only logged and reported in the returned progress.
pub async fn run(
    config: &Config,
    raw_identifier: &str,
    vk_api: &dyn VkApi,
    disk: &dyn DiskApi,
) -> AppResult<UploadProgress> {
    let identifier = InputValidator::validate_user_identifier(raw_identifier)?;

    let owner_id = vk::resolve_user_id(vk_api, &identifier).await?;
    log::info!("Backing up profile photos of VK user {}", owner_id);

    let records = vk::collect_photos(vk_api, owner_id, &config.snapshot_path).await?;

    if !uploader::ensure_folder(disk, &config.upload_folder).await.is_success() {
        log::warn!(
            "Continuing with uploads to '{}' although the folder could not be confirmed",
            config.upload_folder
        );
    }

    let progress = uploader::upload_all(disk, &records, &config.upload_folder).await;
    progress.log_summary();

    Ok(progress)
}
