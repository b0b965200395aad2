//! Image upload service: validation, filename generation, forwarding to
//! the object store.

use std::sync::Arc;

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

use super::storage::ObjectStorage;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
    max_bytes: u64,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, max_bytes: u64) -> Self {
        Self { storage, max_bytes }
    }

    /// Validate and store one image, returning its public URL.
    ///
    /// Only `image/*` content types within the configured size ceiling are
    /// accepted; both checks run before any byte reaches the object store.
    pub async fn store_image(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String> {
        if !content_type.starts_with("image/") {
            return Err(AppError::Validation(
                "Only image uploads are accepted".to_string(),
            ));
        }
        if bytes.len() as u64 > self.max_bytes {
            return Err(AppError::Validation(format!(
                "Image exceeds the maximum size of {} bytes",
                self.max_bytes
            )));
        }

        let key = generate_key(original_name);
        self.storage.put(&key, content_type, bytes).await
    }
}

/// Collision-resistant object key: millisecond timestamp, random suffix,
/// original extension.
fn generate_key(original_name: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();

    let ext = original_name
        .rsplit_once('.')
        .map(|(_, e)| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    format!("{}-{}{}", Utc::now().timestamp_millis(), suffix, ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MockObjectStorage;

    fn service(mock: MockObjectStorage) -> UploadService {
        UploadService::new(Arc::new(mock), 5 * 1024 * 1024)
    }

    #[tokio::test]
    async fn rejects_non_image_content_type() {
        // The mock has no expectations: any store call would panic
        let svc = service(MockObjectStorage::new());
        let err = svc
            .store_image("notes.pdf", "application/pdf", vec![0u8; 16])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn rejects_oversized_image() {
        let mock = MockObjectStorage::new();
        let svc = UploadService::new(Arc::new(mock), 1024);
        let err = svc
            .store_image("big.jpg", "image/jpeg", vec![0u8; 2048])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn stores_valid_image_and_returns_url() {
        let mut mock = MockObjectStorage::new();
        mock.expect_put()
            .withf(|key, content_type, bytes| {
                key.ends_with(".jpg") && content_type == "image/jpeg" && bytes.len() == 4
            })
            .times(1)
            .returning(|key, _, _| Ok(format!("https://img.example/{}", key)));

        let svc = service(mock);
        let url = svc
            .store_image("photo.JPG", "image/jpeg", vec![1, 2, 3, 4])
            .await
            .unwrap();
        assert!(url.starts_with("https://img.example/"));
    }

    #[test]
    fn generated_keys_preserve_extension_and_differ() {
        let a = generate_key("Красная площадь.PNG");
        let b = generate_key("Красная площадь.PNG");
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }

    #[test]
    fn generated_keys_without_extension_are_bare() {
        let key = generate_key("photo");
        assert!(!key.contains('.'));
    }
}
