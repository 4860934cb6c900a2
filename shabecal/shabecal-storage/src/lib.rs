//! # Object storage
//!
//! - `gcs_client`: Cloud Storage JSON API client.
//! - `memory`: in-process store for tests and local runs.
//! - `store`: the [`ObjectStore`] trait both implement.

pub mod error;
pub mod gcs_client;
pub mod memory;
pub mod store;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use gcs_client::{GCS_BASE_URL, GcsObjectStore};
pub use memory::MemoryObjectStore;
pub use store::ObjectStore;
pub use types::{ListResponse, ObjectItem};
