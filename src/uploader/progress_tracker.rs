#[derive(Debug, Clone)]
pub struct FailedUpload {
    pub file_name: String,
    pub source_url: String,
    pub error: String,
}

/// Progress of one upload run. Doubles as the run summary.
#[derive(Debug, Clone, Default)]
pub struct UploadProgress {
    pub total: usize,
    pub completed: usize,
    pub successful_uploads: Vec<String>,
    pub failed_uploads: Vec<FailedUpload>,
}

impl UploadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Log which file is being submitted
    pub fn update_current(&self, file_name: &str) {
        log::info!(
            "Uploading {} ({}/{})",
            file_name,
            self.completed + 1,
            self.total
        );
    }

    pub fn update_success(&mut self, file_name: String) {
        self.completed += 1;
        log::debug!(
            "Progress: accepted {} ({}/{})",
            file_name,
            self.completed,
            self.total
        );
        self.successful_uploads.push(file_name);
    }

    pub fn update_failure(&mut self, file_name: String, source_url: String, error: String) {
        self.completed += 1;
        log::warn!(
            "Progress: failed to upload {} ({}/{}): {}",
            file_name,
            self.completed,
            self.total,
            error
        );
        self.failed_uploads.push(FailedUpload {
            file_name,
            source_url,
            error,
        });
    }

    pub fn log_summary(&self) {
        log::info!(
            "Upload finished: {} of {} photos accepted, {} failed",
            self.successful_uploads.len(),
            self.total,
            self.failed_uploads.len()
        );

        for failed in &self.failed_uploads {
            log::warn!("  {} <- {}: {}", failed.file_name, failed.source_url, failed.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts() {
        let mut progress = UploadProgress::new(3);
        assert_eq!(progress.completed, 0);

        progress.update_success("1.jpg".to_string());
        progress.update_failure(
            "2.jpg".to_string(),
            "https://example.com/2.jpg".to_string(),
            "status 507".to_string(),
        );
        assert_eq!(progress.completed, 2);

        progress.update_success("3.jpg".to_string());
        assert_eq!(progress.completed, progress.total);
        assert_eq!(progress.successful_uploads, vec!["1.jpg", "3.jpg"]);
        assert_eq!(progress.failed_uploads.len(), 1);
        assert_eq!(progress.failed_uploads[0].file_name, "2.jpg");
    }
}
