// Uploader module - pushes collected photos to Yandex.Disk
//
// Files are uploaded by URL: the disk fetches each photo itself after
// accepting the request, so nothing is downloaded locally.

pub mod disk_client;
pub mod naming;
pub mod progress_tracker;
pub mod upload_queue;

pub use disk_client::{DiskApi, DiskClient, DiskReply};
pub use progress_tracker::{FailedUpload, UploadProgress};
pub use upload_queue::{ensure_folder, upload_all, FolderOutcome};
