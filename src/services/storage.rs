//! Object storage client for uploaded images.
//!
//! The store itself is an external S3-compatible service; this module
//! only pushes bytes and hands back the public URL.

use async_trait::async_trait;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
};

/// Outbound interface to the image object store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store an object under `key` and return its public URL
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> AppResult<String>;
}

/// HTTP implementation: one PUT per object against the configured bucket
pub struct HttpObjectStorage {
    client: reqwest::Client,
    config: StorageConfig,
}

impl HttpObjectStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.config.public_base_url.trim_end_matches('/'),
            key
        )
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> AppResult<String> {
        let url = format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.bucket,
            key
        );

        let mut request = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes);

        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("PUT {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::Storage(format!(
                "PUT {} answered {}",
                url,
                response.status()
            )));
        }

        Ok(self.public_url(key))
    }
}
