use crate::{
    abstract_trait::{FileStorageTrait, StoredImage},
    domain::requests::ImageUpload,
    errors::ServiceError,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Local-disk store for uploaded product images.
///
/// Files live under `root` and are served at
/// `<base_url>/uploads/<file name>`. Removal is best-effort: a product
/// write must never fail because its old image could not be unlinked.
pub struct ImageStorage {
    root: PathBuf,
    base_url: String,
}

impl ImageStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn sanitized_extension(file_name: &str) -> String {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                ext.chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| "bin".to_string())
    }
}

#[async_trait]
impl FileStorageTrait for ImageStorage {
    async fn save(&self, upload: &ImageUpload) -> Result<StoredImage, ServiceError> {
        let file_name = format!(
            "{}.{}",
            Uuid::new_v4(),
            Self::sanitized_extension(&upload.file_name)
        );

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            error!("❌ Failed to create upload directory: {e}");
            ServiceError::Storage(format!("create upload dir: {e}"))
        })?;

        let path = self.root.join(&file_name);
        tokio::fs::write(&path, &upload.bytes).await.map_err(|e| {
            error!("❌ Failed to store uploaded file {file_name}: {e}");
            ServiceError::Storage(format!("write upload: {e}"))
        })?;

        // platform separators never leak into the URL
        let public_url = format!("{}/uploads/{}", self.base_url, file_name).replace('\\', "/");

        info!("🖼️ Stored uploaded image {file_name}");

        Ok(StoredImage {
            file_name,
            public_url,
        })
    }

    async fn remove_by_url(&self, url: &str) {
        if url.is_empty() {
            return;
        }

        let Some(path) = self.path_for_url(url) else {
            warn!("🖼️ Not removing image with foreign URL: {url}");
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => info!("🗑️ Removed image file {}", path.display()),
            Err(e) => warn!("⚠️ Failed to remove image file {}: {e}", path.display()),
        }
    }

    fn path_for_url(&self, url: &str) -> Option<PathBuf> {
        let rest = url.strip_prefix(&self.base_url)?;
        let file_name = rest.strip_prefix("/uploads/")?;

        // issued URLs point at a flat directory; anything nested is foreign
        if file_name.is_empty() || file_name.contains('/') || file_name.contains("..") {
            return None;
        }

        Some(self.root.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store(dir: &Path) -> ImageStorage {
        ImageStorage::new(dir, "http://localhost:8080/")
    }

    #[tokio::test]
    async fn save_writes_file_and_builds_public_url() {
        let dir = tempdir().unwrap();
        let storage = store(dir.path());

        let upload = ImageUpload {
            file_name: "dinnye.JPG".to_string(),
            bytes: vec![1, 2, 3],
        };
        let stored = storage.save(&upload).await.unwrap();

        assert!(
            stored
                .public_url
                .starts_with("http://localhost:8080/uploads/")
        );
        assert!(stored.public_url.ends_with(".jpg"));

        let on_disk = dir.path().join(&stored.file_name);
        assert_eq!(std::fs::read(on_disk).unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn remove_by_url_deletes_the_stored_file() {
        let dir = tempdir().unwrap();
        let storage = store(dir.path());

        let upload = ImageUpload {
            file_name: "alma.png".to_string(),
            bytes: b"img".to_vec(),
        };
        let stored = storage.save(&upload).await.unwrap();
        let path = dir.path().join(&stored.file_name);
        assert!(path.exists());

        storage.remove_by_url(&stored.public_url).await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_is_best_effort_for_missing_and_empty() {
        let dir = tempdir().unwrap();
        let storage = store(dir.path());

        // neither may panic or error out
        storage.remove_by_url("").await;
        storage
            .remove_by_url("http://localhost:8080/uploads/nincs-ilyen.jpg")
            .await;
    }

    #[test]
    fn path_for_url_rejects_foreign_urls() {
        let dir = tempdir().unwrap();
        let storage = store(dir.path());

        assert!(storage.path_for_url("http://example.com/uploads/x.jpg").is_none());
        assert!(storage.path_for_url("http://localhost:8080/other/x.jpg").is_none());
        assert!(
            storage
                .path_for_url("http://localhost:8080/uploads/../secret")
                .is_none()
        );
    }

    #[test]
    fn path_for_url_resolves_issued_urls() {
        let dir = tempdir().unwrap();
        let storage = store(dir.path());

        let path = storage
            .path_for_url("http://localhost:8080/uploads/kep.jpg")
            .unwrap();
        assert_eq!(path, dir.path().join("kep.jpg"));
    }

    #[test]
    fn extension_is_sanitized() {
        assert_eq!(ImageStorage::sanitized_extension("a.PNG"), "png");
        assert_eq!(ImageStorage::sanitized_extension("noext"), "bin");
        assert_eq!(ImageStorage::sanitized_extension("x.j?pg"), "jpg");
    }
}
