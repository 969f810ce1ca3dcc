use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::types::Keyword;
use crate::{ops, KeywordStore};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryKeywordStore {
    keywords: RwLock<Vec<Keyword>>,
}

impl MemoryKeywordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeywordStore for MemoryKeywordStore {
    async fn list(&self) -> Result<Vec<Keyword>> {
        Ok(ops::newest_first(&self.keywords.read().await))
    }

    async fn create(&self, keyword: &str) -> Result<Keyword> {
        ops::insert(&mut *self.keywords.write().await, keyword)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        ops::remove(&mut *self.keywords.write().await, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    #[tokio::test]
    async fn create_list_delete() {
        let store = MemoryKeywordStore::new();
        let first = store.create("first").await.unwrap();
        let second = store.create("second").await.unwrap();

        let listed: Vec<Uuid> = store.list().await.unwrap().iter().map(|k| k.id).collect();
        assert_eq!(listed, vec![second.id, first.id]);

        store.delete(first.id).await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec![second.clone()]);
        assert!(matches!(
            store.delete(first.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let store = MemoryKeywordStore::new();
        store.create("ChatGPT").await.unwrap();
        store.create("claude").await.unwrap();
        store.create("gemini").await.unwrap();

        let hits: Vec<String> = store
            .search("GPT")
            .await
            .unwrap()
            .into_iter()
            .map(|k| k.keyword)
            .collect();
        assert_eq!(hits, vec!["chatgpt"]);
        assert_eq!(store.search("  ").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn get_by_id() {
        let store = MemoryKeywordStore::new();
        let k = store.create("sora").await.unwrap();
        assert_eq!(store.get(k.id).await.unwrap(), k);
        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
