use async_trait::async_trait;
use reqwest::{header, Client};

use crate::config::Config;
use crate::errors::AppResult;

pub const STATUS_CREATED: u16 = 201;
pub const STATUS_ACCEPTED: u16 = 202;
pub const STATUS_CONFLICT: u16 = 409;

/// Status and body of a Yandex.Disk reply. Interpreting the status is left
/// to the caller since each operation has its own success codes.
#[derive(Debug, Clone)]
pub struct DiskReply {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait DiskApi: Send + Sync {
    /// `PUT /resources?path=<path>`
    async fn create_folder(&self, path: &str) -> AppResult<DiskReply>;

    /// `POST /resources/upload?path=<path>&url=<source_url>`
    async fn upload_from_url(&self, path: &str, source_url: &str) -> AppResult<DiskReply>;
}

/// Yandex.Disk REST client
pub struct DiskClient {
    client: Client,
    base_url: String,
    token: String,
}

impl DiskClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.disk_base_url.trim_end_matches('/').to_string(),
            token: config.yandex_token.clone(),
        })
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.token)
    }

    async fn into_reply(response: reqwest::Response) -> AppResult<DiskReply> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Ok(DiskReply { status, body })
    }
}

#[async_trait]
impl DiskApi for DiskClient {
    async fn create_folder(&self, path: &str) -> AppResult<DiskReply> {
        let url = format!("{}/resources", self.base_url);
        log::debug!("Disk request: PUT {} path={}", url, path);

        let response = self
            .client
            .put(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .query(&[("path", path)])
            .send()
            .await?;

        Self::into_reply(response).await
    }

    async fn upload_from_url(&self, path: &str, source_url: &str) -> AppResult<DiskReply> {
        let url = format!("{}/resources/upload", self.base_url);
        log::debug!("Disk request: POST {} path={}", url, path);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .query(&[("path", path), ("url", source_url)])
            .send()
            .await?;

        Self::into_reply(response).await
    }
}
