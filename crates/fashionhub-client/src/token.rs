//! Durable key/value storage for the session token.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::ClientError;

/// Key the session token is stored under.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

pub trait TokenStore: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] or [`ClientError::StorageFormat`] when
    /// the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the store cannot be updated.
    fn remove(&self, key: &str) -> Result<(), ClientError>;
}

/// Process-local store for tests and one-shot commands.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a session token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(AUTH_TOKEN_KEY.to_string(), token.to_string());
        Self {
            values: Mutex::new(values),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// JSON object on disk, e.g. `{"auth_token": "..."}`. A missing file reads
/// as empty.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, source: std::io::Error) -> ClientError {
        ClientError::Storage {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn read(&self) -> Result<BTreeMap<String, String>, ClientError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.storage_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| ClientError::StorageFormat {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }
        let json = serde_json::to_string_pretty(values).map_err(|source| {
            ClientError::StorageFormat {
                path: self.path.display().to_string(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|e| self.storage_error(e))
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());
        self.write(&values)
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        let mut values = self.read()?;
        if values.remove(key).is_some() {
            self.write(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
        store.set(AUTH_TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        store.remove(AUTH_TOKEN_KEY).unwrap();
        store.remove(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileTokenStore::new(&path).set(AUTH_TOKEN_KEY, "stub-token").unwrap();
        let reopened = FileTokenStore::new(&path);
        assert_eq!(
            reopened.get(AUTH_TOKEN_KEY).unwrap().as_deref(),
            Some("stub-token")
        );

        reopened.remove(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(FileTokenStore::new(&path).get(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
        store.remove(AUTH_TOKEN_KEY).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let err = FileTokenStore::new(&path).get(AUTH_TOKEN_KEY).unwrap_err();
        assert!(matches!(err, ClientError::StorageFormat { .. }));
    }
}
