use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StorageError, StorageResult};
use crate::store::ObjectStore;
use crate::types::ObjectItem;

struct StoredObject {
    data: Vec<u8>,
    content_type: String,
}

/// In-process store with the same semantics as the GCS client.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: RwLock<BTreeMap<String, StoredObject>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }

    pub async fn content_type(&self, name: &str) -> Option<String> {
        self.objects.read().await.get(name).map(|o| o.content_type.clone())
    }
}

fn item(name: &str, object: &StoredObject) -> ObjectItem {
    ObjectItem {
        name: name.to_string(),
        size: Some(object.data.len().to_string()),
        content_type: Some(object.content_type.clone()),
        ..Default::default()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, name: &str, data: Vec<u8>, content_type: &str) -> StorageResult<ObjectItem> {
        let object = StoredObject {
            data,
            content_type: content_type.to_string(),
        };
        let uploaded = item(name, &object);
        self.objects.write().await.insert(name.to_string(), object);
        Ok(uploaded)
    }

    async fn download(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.objects.read().await.get(name).map(|o| o.data.clone()))
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<ObjectItem>> {
        let objects = self.objects.read().await;
        Ok(objects
            .range(prefix.to_string()..)
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(name, object)| item(name, object))
            .collect())
    }

    async fn delete(&self, name: &str) -> StorageResult<()> {
        match self.objects.write().await.remove(name) {
            Some(_) => Ok(()),
            None => Err(StorageError::Status {
                operation: "delete",
                status: 404,
                body: format!("No such object: {name}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_filters_by_prefix() {
        let store = MemoryObjectStore::new();
        store.upload("prompts/a/manifest.json", b"{}".to_vec(), "application/json").await.unwrap();
        store.upload("prompts/a/x.txt", b"x".to_vec(), "text/plain").await.unwrap();
        store.upload("prompts_other", b"y".to_vec(), "text/plain").await.unwrap();
        store.upload("other/z", b"z".to_vec(), "text/plain").await.unwrap();

        let names: Vec<String> = store.list("prompts/").await.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["prompts/a/manifest.json", "prompts/a/x.txt"]);
    }

    #[tokio::test]
    async fn delete_of_missing_object_is_reported() {
        let store = MemoryObjectStore::new();
        let err = store.delete("nope").await.unwrap_err();
        assert!(matches!(err, StorageError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn download_missing_is_none() {
        let store = MemoryObjectStore::new();
        assert_eq!(store.download("nope").await.unwrap(), None);
        store.upload("yes", b"1".to_vec(), "text/plain").await.unwrap();
        assert_eq!(store.download("yes").await.unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.content_type("yes").await.as_deref(), Some("text/plain"));
    }
}
