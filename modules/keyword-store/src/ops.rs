use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::types::Keyword;

pub(crate) fn insert(keywords: &mut Vec<Keyword>, raw: &str) -> Result<Keyword> {
    let keyword = raw.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(StoreError::Invalid("keyword must not be empty".to_string()));
    }
    if keywords.iter().any(|k| k.keyword.to_lowercase() == keyword) {
        return Err(StoreError::AlreadyExists(keyword));
    }

    let entry = Keyword {
        id: Uuid::new_v4(),
        keyword,
        created_at: Utc::now(),
    };
    keywords.push(entry.clone());
    Ok(entry)
}

pub(crate) fn remove(keywords: &mut Vec<Keyword>, id: Uuid) -> Result<()> {
    let index = keywords
        .iter()
        .position(|k| k.id == id)
        .ok_or(StoreError::NotFound(id))?;
    keywords.remove(index);
    Ok(())
}

/// Insertion order is oldest first, so reversing before the stable sort keeps
/// same-timestamp entries newest first too.
pub(crate) fn newest_first(keywords: &[Keyword]) -> Vec<Keyword> {
    let mut sorted: Vec<Keyword> = keywords.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn insert_lowercases_and_trims() {
        let mut list = Vec::new();
        let k = insert(&mut list, "  ChatGPT ").unwrap();
        assert_eq!(k.keyword, "chatgpt");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn duplicate_check_ignores_case() {
        let mut list = Vec::new();
        insert(&mut list, "Claude").unwrap();
        let err = insert(&mut list, "CLAUDE").unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn blank_keyword_is_invalid() {
        let mut list = Vec::new();
        assert!(matches!(insert(&mut list, "   "), Err(StoreError::Invalid(_))));
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut list = Vec::new();
        insert(&mut list, "a").unwrap();
        let err = remove(&mut list, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn newest_first_orders_by_created_at_then_insertion() {
        let now = Utc::now();
        let make = |name: &str, offset: i64| Keyword {
            id: Uuid::new_v4(),
            keyword: name.to_string(),
            created_at: now + Duration::seconds(offset),
        };
        let list = vec![make("old", -10), make("tie-a", 0), make("tie-b", 0), make("older", -20)];
        let names: Vec<String> = newest_first(&list).into_iter().map(|k| k.keyword).collect();
        assert_eq!(names, vec!["tie-b", "tie-a", "old", "older"]);
    }
}
