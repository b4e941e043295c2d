use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Raw access to VK API methods. Returns the response body untouched so the
/// callers can decode it with the schemas in [`super::models`].
#[async_trait]
pub trait VkApi: Send + Sync {
    async fn call(&self, method: &str, params: &[(&str, String)]) -> AppResult<String>;
}

pub struct VkClient {
    client: Client,
    base_url: String,
    access_token: String,
    version: String,
}

impl VkClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.vk_api_base_url.trim_end_matches('/').to_string(),
            access_token: config.vk_token.clone(),
            version: config.vk_api_version.clone(),
        })
    }
}

#[async_trait]
impl VkApi for VkClient {
    async fn call(&self, method: &str, params: &[(&str, String)]) -> AppResult<String> {
        let url = format!("{}/{}", self.base_url, method);
        log::debug!("VK request: {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("v", self.version.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        log::debug!(
            "VK {} answered {} (first 300 chars): {}",
            method,
            status,
            &body[..body.char_indices().nth(300).map_or(body.len(), |(i, _)| i)]
        );

        // VK reports method errors with 200 and an `error` object; anything
        // else non-2xx means the body will not be an envelope.
        if !status.is_success() {
            return Err(AppError::parse(
                method,
                &format!("HTTP status {}", status.as_u16()),
            ));
        }

        Ok(body)
    }
}
