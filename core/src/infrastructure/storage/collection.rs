use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::error;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Records of one type, each stored as JSON under `{prefix}.{id}`.
pub struct KvCollection<S, T> {
    store: Arc<S>,
    prefix: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<S, T> Clone for KvCollection<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            prefix: self.prefix,
            _record: PhantomData,
        }
    }
}

impl<S, T> KvCollection<S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(store: Arc<S>, prefix: &'static str) -> Self {
        Self {
            store,
            prefix,
            _record: PhantomData,
        }
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}.{}", self.prefix, id)
    }

    fn decode(&self, key: &str, raw: &str) -> Result<T, CoreError> {
        serde_json::from_str(raw).map_err(|e| {
            error!("Failed to decode record {}: {}", key, e);
            CoreError::StorageError(format!("record {key} is corrupted: {e}"))
        })
    }

    pub async fn all(&self) -> Result<Vec<T>, CoreError> {
        let prefix = format!("{}.", self.prefix);

        self.store
            .list(&prefix)
            .await?
            .into_iter()
            .map(|(key, raw)| self.decode(&key, &raw))
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<T>, CoreError> {
        let key = self.key(id);

        match self.store.get(&key).await? {
            Some(raw) => self.decode(&key, &raw).map(Some),
            None => Ok(None),
        }
    }

    pub async fn put(&self, id: Uuid, record: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(record).map_err(|e| {
            error!("Failed to encode record: {}", e);
            CoreError::InternalServerError
        })?;

        self.store.set(&self.key(id), raw).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<bool, CoreError> {
        self.store.delete(&self.key(id)).await
    }
}
