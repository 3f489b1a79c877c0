//! Image storage collaborator. Posts hold the opaque reference this store
//! returns; the filesystem layout behind it is not part of the data model.

use crate::error::AppError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist the bytes under a freshly generated name and return the
    /// opaque reference. The suggested name only contributes its extension.
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<String, AppError>;

    /// Read back the bytes for a reference returned by `save`.
    async fn read(&self, reference: &str) -> Result<Vec<u8>, AppError>;
}

/// Filesystem-backed store rooted at the configured upload directory.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Create the upload directory if missing and return the store.
    pub async fn init(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }
}

/// Generated names are uuid-based so concurrent uploads with the same
/// original filename never overwrite each other.
fn unique_name(suggested_name: &str) -> String {
    let ext = Path::new(suggested_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or("bin");
    format!("{}.{}", Uuid::new_v4(), ext.to_lowercase())
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<String, AppError> {
        let name = unique_name(suggested_name);
        tokio::fs::write(self.root.join(&name), bytes).await?;
        tracing::debug!(reference = %name, size = bytes.len(), "stored image");
        Ok(name)
    }

    async fn read(&self, reference: &str) -> Result<Vec<u8>, AppError> {
        // References are bare filenames; reject anything path-shaped.
        if reference.contains('/') || reference.contains('\\') || reference.contains("..") {
            return Err(AppError::BadRequest(format!(
                "invalid image reference: {}",
                reference
            )));
        }
        match tokio::fs::read(self.root.join(reference)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(format!("image not found: {}", reference)))
            }
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}
