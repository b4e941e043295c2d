use super::disk_client::{DiskApi, STATUS_ACCEPTED, STATUS_CONFLICT, STATUS_CREATED};
use super::naming::FileNamer;
use super::progress_tracker::UploadProgress;
use crate::errors::{AppError, AppResult};
use crate::vk::PhotoRecord;

#[derive(Debug)]
pub enum FolderOutcome {
    Created,
    AlreadyExists,
    Failed(AppError),
}

impl FolderOutcome {
    pub fn from_reply(status: u16, body: &str) -> Self {
        match status {
            STATUS_CREATED => FolderOutcome::Created,
            STATUS_CONFLICT => FolderOutcome::AlreadyExists,
            _ => FolderOutcome::Failed(AppError::remote_operation("create folder", status, body)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FolderOutcome::Created | FolderOutcome::AlreadyExists)
    }
}

/// Make sure the destination folder exists. Failures are logged and handed
/// back to the caller; they never abort the run. Transport errors are
/// returned as raised, unexpected statuses as `RemoteOperation`.
pub async fn ensure_folder(disk: &dyn DiskApi, folder_name: &str) -> FolderOutcome {
    let outcome = match disk.create_folder(folder_name).await {
        Ok(reply) => FolderOutcome::from_reply(reply.status, &reply.body),
        Err(e) => FolderOutcome::Failed(e),
    };

    match &outcome {
        FolderOutcome::Created => log::info!("Folder '{}' created", folder_name),
        FolderOutcome::AlreadyExists => log::info!("Folder '{}' already exists", folder_name),
        FolderOutcome::Failed(e) => log::error!("Failed to create folder '{}': {}", folder_name, e),
    }

    outcome
}

async fn upload_one(
    disk: &dyn DiskApi,
    remote_path: &str,
    record: &PhotoRecord,
) -> AppResult<()> {
    let reply = disk.upload_from_url(remote_path, &record.url).await?;

    if reply.status != STATUS_ACCEPTED {
        return Err(AppError::remote_operation("upload", reply.status, &reply.body));
    }

    Ok(())
}

/// Submit every record for server-side fetch, one at a time and in order.
/// A failed photo is recorded in the returned progress and the queue moves on.
pub async fn upload_all(
    disk: &dyn DiskApi,
    records: &[PhotoRecord],
    folder_name: &str,
) -> UploadProgress {
    let mut namer = FileNamer::new();
    let mut progress = UploadProgress::new(records.len());

    for record in records {
        let file_name = namer.next_name(record.like_count);
        let remote_path = format!("{}/{}", folder_name, file_name);

        progress.update_current(&file_name);

        match upload_one(disk, &remote_path, record).await {
            Ok(()) => progress.update_success(file_name),
            Err(e) => progress.update_failure(file_name, record.url.clone(), e.to_string()),
        }
    }

    progress
}
