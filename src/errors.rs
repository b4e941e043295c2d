use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("VK API error {code}: {message}")]
    UpstreamApi { code: i64, message: String },

    #[error("Unexpected {endpoint} response: {message}")]
    Parse { endpoint: String, message: String },

    #[error("Yandex.Disk {operation} failed with status {status}: {body}")]
    RemoteOperation {
        operation: String,
        status: u16,
        body: String,
    },
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn parse(endpoint: &str, message: &str) -> Self {
        Self::Parse {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn remote_operation(operation: &str, status: u16, body: &str) -> Self {
        Self::RemoteOperation {
            operation: operation.to_string(),
            status,
            body: body.to_string(),
        }
    }

    /// Errors that leave the run without any photo data to work with.
    pub fn is_fatal_upstream(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamApi { .. }
                | AppError::Parse { .. }
                | AppError::Network(_)
                | AppError::Io(_)
                | AppError::Json(_)
        )
    }
}
