//! The list of tracked keywords.
//!
//! Callers hold a `dyn KeywordStore`; the trend lookup never touches it.

pub mod error;
pub mod file;
pub mod memory;
mod ops;
pub mod types;

pub use error::{Result, StoreError};
pub use file::JsonFileKeywordStore;
pub use memory::MemoryKeywordStore;
pub use types::Keyword;

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait KeywordStore: Send + Sync {
    /// All keywords, newest first.
    async fn list(&self) -> Result<Vec<Keyword>>;

    /// Add a keyword. Duplicates are detected case-insensitively.
    async fn create(&self, keyword: &str) -> Result<Keyword>;

    async fn delete(&self, id: Uuid) -> Result<()>;

    async fn get(&self, id: Uuid) -> Result<Keyword> {
        self.list()
            .await?
            .into_iter()
            .find(|k| k.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Case-insensitive substring filter over [`KeywordStore::list`].
    /// A blank term returns everything.
    async fn search(&self, term: &str) -> Result<Vec<Keyword>> {
        let keywords = self.list().await?;
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(keywords);
        }
        Ok(keywords
            .into_iter()
            .filter(|k| k.keyword.to_lowercase().contains(&needle))
            .collect())
    }
}
