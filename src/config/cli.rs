use crate::core::fixture::write_atomic;
use crate::core::Storage;
use crate::utils::error::{FixtureError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|source| FixtureError::FileRead {
                path: full_path,
                source,
            })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<usize> {
        write_atomic(&self.base_path.join(path), data)
    }
}
