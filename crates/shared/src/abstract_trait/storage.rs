use crate::{domain::requests::ImageUpload, errors::ServiceError};
use async_trait::async_trait;
use std::{path::PathBuf, sync::Arc};

pub type DynFileStorage = Arc<dyn FileStorageTrait + Send + Sync>;

/// A stored upload: where it landed on disk and the URL it is served at.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub file_name: String,
    pub public_url: String,
}

#[async_trait]
pub trait FileStorageTrait {
    async fn save(&self, upload: &ImageUpload) -> Result<StoredImage, ServiceError>;

    /// Best-effort removal of the file behind a previously issued public
    /// URL. Never fails the surrounding operation; an empty URL is a no-op.
    async fn remove_by_url(&self, url: &str);

    /// Resolves a public URL back to the on-disk path, or `None` when the
    /// URL was not issued by this store.
    fn path_for_url(&self, url: &str) -> Option<PathBuf>;
}
