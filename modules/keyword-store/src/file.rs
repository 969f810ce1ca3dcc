use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::types::Keyword;
use crate::{ops, KeywordStore};

/// Keeps the whole list as one JSON array on disk. Every mutation rewrites
/// the file through a sibling temp file and a rename.
pub struct JsonFileKeywordStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileKeywordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Keyword>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, keywords: &[Keyword]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(keywords)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), count = keywords.len(), "Saved keyword list");
        Ok(())
    }
}

#[async_trait]
impl KeywordStore for JsonFileKeywordStore {
    async fn list(&self) -> Result<Vec<Keyword>> {
        let _guard = self.lock.lock().await;
        Ok(ops::newest_first(&self.load().await?))
    }

    async fn create(&self, keyword: &str) -> Result<Keyword> {
        let _guard = self.lock.lock().await;
        let mut keywords = self.load().await?;
        let created = ops::insert(&mut keywords, keyword)?;
        self.save(&keywords).await?;
        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut keywords = self.load().await?;
        ops::remove(&mut keywords, id)?;
        self.save(&keywords).await
    }
}
