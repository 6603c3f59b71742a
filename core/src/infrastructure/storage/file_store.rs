use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::ports::{KeyValueStore, is_valid_key},
};

const EXTENSION: &str = "json";

/// One `{key}.json` file per key inside `data_dir`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates `data_dir` when missing.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| storage_error("create data directory", &data_dir, e))?;

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        if !is_valid_key(key) {
            return Err(CoreError::StorageError(format!("invalid key: {key:?}")));
        }

        Ok(self.data_dir.join(format!("{key}.{EXTENSION}")))
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> CoreError {
    error!("Failed to {} {}: {}", action, path.display(), e);
    CoreError::StorageError(format!("failed to {action} {}: {e}", path.display()))
}

impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &path, e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let tmp = self.data_dir.join(format!(".{key}.{}.tmp", Uuid::new_v4()));

        fs::write(&tmp, value)
            .await
            .map_err(|e| storage_error("write", &tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(storage_error("replace", &path, e));
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CoreError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(storage_error("delete", &path, e)),
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<(String, String)>, CoreError> {
        let mut dir = fs::read_dir(&self.data_dir)
            .await
            .map_err(|e| storage_error("list", &self.data_dir, e))?;

        let mut keys = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| storage_error("list", &self.data_dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(key) = path.file_stem().and_then(|stem| stem.to_str())
                && key.starts_with(prefix)
                && is_valid_key(key)
            {
                keys.push(key.to_string());
            }
        }
        keys.sort();

        let mut pairs = Vec::with_capacity(keys.len());
        for key in keys {
            // Deleted between the directory scan and the read.
            if let Some(value) = self.get(&key).await? {
                pairs.push((key, value));
            }
        }

        Ok(pairs)
    }
}
