use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub const LEDGER_KEY: &str = "savingChallengeState";
pub const THEME_KEY: &str = "savingAppTheme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/store.json"))
}

/// String key-value store. Every `set` rewrites the whole backing file.
#[derive(Debug, Default)]
pub struct KvStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl KvStore {
    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        let entries = match fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("no store at {}, starting fresh", path.display());
                BTreeMap::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// `value` only sticks once the file write succeeds.
    pub async fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(err) = self.flush().await {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    async fn flush(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let payload = serde_json::to_vec_pretty(&self.entries)?;
        if let Err(err) = fs::write(path, payload).await {
            error!("failed to write store {}: {err}", path.display());
            return Err(err.into());
        }
        Ok(())
    }
}
