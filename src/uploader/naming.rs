use std::collections::HashMap;

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Assigns remote file names from like counts.
///
/// The first photo with a given like count is named `<likes>.jpg`; later
/// ones get the current time appended. Names are not checked against each
/// other, so two repeats inside the same second end up with the same name.
#[derive(Debug, Default)]
pub struct FileNamer {
    assigned: HashMap<i64, String>,
}

impl FileNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self, like_count: i64) -> String {
        self.next_name_at(like_count, Local::now())
    }

    pub fn next_name_at(&mut self, like_count: i64, now: DateTime<Local>) -> String {
        let file_name = if self.assigned.contains_key(&like_count) {
            format!("{}_{}.jpg", like_count, now.format(TIMESTAMP_FORMAT))
        } else {
            format!("{}.jpg", like_count)
        };

        self.assigned.insert(like_count, file_name.clone());
        file_name
    }
}
