//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use resume_core::item::{Item, ItemKey};
use resume_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Items are ordered by key, so per-user queries return items sorted by
/// `itemId`, like a DynamoDB query on the table's sort key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<ItemKey, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with items (useful for testing).
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items.into_iter().map(|item| (item.key(), item)).collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn query_by_field(&self, user_id: &str, field: &str) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.user_id == user_id)
            .filter(|item| item.attributes.field.as_deref() == Some(field))
            .cloned()
            .collect())
    }

    async fn query_by_user(&self, user_id: &str) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        let key = item.key();
        if items.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: key.to_string(),
            });
        }
        items.insert(key, item.clone());
        Ok(())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(item.key(), item.clone());
        Ok(())
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}
