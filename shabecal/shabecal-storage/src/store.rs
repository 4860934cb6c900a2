use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::ObjectItem;

/// Bucket-scoped object operations.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, name: &str, data: Vec<u8>, content_type: &str) -> StorageResult<ObjectItem>;

    /// `None` when the object does not exist.
    async fn download(&self, name: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Every object whose name starts with `prefix`, across all pages.
    async fn list(&self, prefix: &str) -> StorageResult<Vec<ObjectItem>>;

    async fn delete(&self, name: &str) -> StorageResult<()>;
}
