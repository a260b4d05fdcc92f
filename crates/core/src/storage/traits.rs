use async_trait::async_trait;

use crate::item::{Item, ItemKey};

use super::Result;

/// Repository for resume items, backed by one table.
///
/// Every method maps to exactly one storage call. There is no retry, no
/// pagination and no transaction spanning several calls.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its primary key.
    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>>;

    /// Gets all items of a user in one resume section, via the field index.
    async fn query_by_field(&self, user_id: &str, field: &str) -> Result<Vec<Item>>;

    /// Gets all items of a user.
    async fn query_by_user(&self, user_id: &str) -> Result<Vec<Item>>;

    /// Creates an item, failing with `AlreadyExists` if its key is taken.
    async fn create_item(&self, item: &Item) -> Result<()>;

    /// Writes an item unconditionally, replacing any existing one.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item. Deleting a missing item is not an error.
    async fn delete_item(&self, key: &ItemKey) -> Result<()>;
}
