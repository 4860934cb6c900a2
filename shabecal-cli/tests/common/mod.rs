#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_KEY: &str = include_str!("../fixtures/test_key.pem");

pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn create_file(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.temp_dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Writes a service-account key whose token endpoint is `token_uri`.
    pub fn create_key_file(&self, token_uri: &str) -> PathBuf {
        let key = serde_json::json!({
            "type": "service_account",
            "project_id": "clinic-project",
            "private_key_id": "kid",
            "private_key": TEST_KEY,
            "client_email": "karte@clinic-project.iam.gserviceaccount.com",
            "client_id": "1",
            "token_uri": token_uri
        });
        self.create_file("key.json", key.to_string().as_bytes())
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        let file_path = self.temp_dir.path().join(relative_path);
        fs::read_to_string(&file_path).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
