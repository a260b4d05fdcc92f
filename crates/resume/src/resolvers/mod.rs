//! The resolver set: one function per GraphQL field.
//!
//! Each resolver turns `(identity, arguments)` into exactly one repository
//! call and returns the domain result. Reads accept a caller-supplied
//! `userId` when the request is anonymous; writes always take the owner from
//! the caller's claims.

mod error;

use resume_core::identity::{require_user_id, resolve_user_id, Identity};
use resume_core::item::{build_item, generate_item_id, Item, ItemInput, ItemKey};
use resume_core::storage::ItemRepository;

pub use error::{ResolveError, BAD_USER_INPUT, UNAUTHENTICATED};

pub type Result<T> = std::result::Result<T, ResolveError>;

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    value.ok_or(ResolveError::MissingArgument(name))
}

/// Resolves `item(userId, itemId)` with a primary key lookup.
pub async fn resolve_item(
    repo: &dyn ItemRepository,
    identity: &Identity,
    user_id: Option<&str>,
    item_id: Option<&str>,
) -> Result<Option<Item>> {
    let result = async {
        let user_id = resolve_user_id(identity, user_id)?;
        let item_id = required(item_id, "itemId")?;
        tracing::debug!(%user_id, item_id, "Resolving item");

        Ok::<_, ResolveError>(repo.get_item(&ItemKey::new(user_id, item_id)).await?)
    }
    .await;

    result.inspect_err(|e| e.log("item"))
}

/// Resolves `fieldItems(userId, field)` through the field index.
pub async fn resolve_field_items(
    repo: &dyn ItemRepository,
    identity: &Identity,
    user_id: Option<&str>,
    field: Option<&str>,
) -> Result<Vec<Item>> {
    let result = async {
        let user_id = resolve_user_id(identity, user_id)?;
        let field = required(field, "field")?;
        tracing::debug!(%user_id, field, "Resolving field items");

        Ok::<_, ResolveError>(repo.query_by_field(&user_id, field).await?)
    }
    .await;

    result.inspect_err(|e| e.log("fieldItems"))
}

/// Resolves `resumeItems(userId)`: every item of one user.
pub async fn resolve_resume_items(
    repo: &dyn ItemRepository,
    identity: &Identity,
    user_id: Option<&str>,
) -> Result<Vec<Item>> {
    let result = async {
        let user_id = resolve_user_id(identity, user_id)?;
        tracing::debug!(%user_id, "Resolving resume items");

        Ok::<_, ResolveError>(repo.query_by_user(&user_id).await?)
    }
    .await;

    result.inspect_err(|e| e.log("resumeItems"))
}

/// Resolves `createItem(item)` under a freshly generated `itemId`.
pub async fn add_item(
    repo: &dyn ItemRepository,
    identity: &Identity,
    input: Option<&ItemInput>,
) -> Result<Item> {
    add_item_with_id(repo, identity, input, generate_item_id()).await
}

/// Creates an item under the given `itemId`.
///
/// Fails with a conflict if the caller already owns an item with that id.
pub async fn add_item_with_id(
    repo: &dyn ItemRepository,
    identity: &Identity,
    input: Option<&ItemInput>,
    item_id: String,
) -> Result<Item> {
    let result = async {
        let user_id = require_user_id(identity)?;
        let input = input.ok_or(ResolveError::MissingArgument("item"))?;
        let item = build_item(user_id, item_id, input);
        tracing::debug!(key = %item.key(), "Creating item");

        repo.create_item(&item).await?;
        tracing::info!(key = %item.key(), "Created item");
        Ok::<_, ResolveError>(item)
    }
    .await;

    result.inspect_err(|e| e.log("createItem"))
}

/// Resolves `updateItem(item)`: a full, unconditional overwrite.
///
/// Updating a missing item creates it.
pub async fn update_item(
    repo: &dyn ItemRepository,
    identity: &Identity,
    input: Option<&ItemInput>,
) -> Result<Item> {
    let result = async {
        let user_id = require_user_id(identity)?;
        let input = input.ok_or(ResolveError::MissingArgument("item"))?;
        let item_id = required(input.item_id.as_deref(), "item.itemId")?;
        let item = build_item(user_id, item_id, input);
        tracing::debug!(key = %item.key(), "Updating item");

        repo.put_item(&item).await?;
        tracing::info!(key = %item.key(), "Updated item");
        Ok::<_, ResolveError>(item)
    }
    .await;

    result.inspect_err(|e| e.log("updateItem"))
}

/// Resolves `deleteItem(itemId)`.
///
/// Returns the requested key whether or not an item existed.
pub async fn delete_item(
    repo: &dyn ItemRepository,
    identity: &Identity,
    item_id: Option<&str>,
) -> Result<ItemKey> {
    let result = async {
        let user_id = require_user_id(identity)?;
        let item_id = required(item_id, "itemId")?;
        let key = ItemKey::new(user_id, item_id);
        tracing::debug!(%key, "Deleting item");

        repo.delete_item(&key).await?;
        tracing::info!(%key, "Deleted item");
        Ok::<_, ResolveError>(key)
    }
    .await;

    result.inspect_err(|e| e.log("deleteItem"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_core::identity::{Claims, IdentityError, USERNAME_CLAIM};
    use resume_core::item::ItemAttributes;
    use resume_core::storage::RepositoryError;

    use crate::storage::InMemoryRepository;

    fn user(username: &str) -> Identity {
        Identity::Authenticated(Claims::new().with(USERNAME_CLAIM, username))
    }

    fn input(name: &str) -> ItemInput {
        ItemInput {
            attributes: ItemAttributes {
                field: Some("Experience".to_string()),
                name: Some(name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_item_uses_claims_not_input_user() {
        let repo = InMemoryRepository::new();
        let mut input = input("A");
        input.user_id = Some("intruder".to_string());

        let item = add_item(&repo, &user("u1"), Some(&input)).await.unwrap();

        assert_eq!(item.user_id, "u1");
        assert!(!item.item_id.is_empty());
        assert!(repo.query_by_user("intruder").await.unwrap().is_empty());
        assert_eq!(repo.query_by_user("u1").await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_add_item_requires_authentication() {
        let repo = InMemoryRepository::new();

        let result = add_item(&repo, &Identity::Anonymous, Some(&input("A"))).await;

        assert_eq!(
            result,
            Err(ResolveError::Identity(IdentityError::Unauthenticated))
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_item_with_taken_id_conflicts() {
        let repo = InMemoryRepository::new();
        let identity = user("u1");
        add_item_with_id(&repo, &identity, Some(&input("A")), "fixed".to_string())
            .await
            .unwrap();

        let result =
            add_item_with_id(&repo, &identity, Some(&input("B")), "fixed".to_string()).await;

        assert_eq!(result.unwrap_err().code(), "CONFLICT");
        let stored = resolve_item(&repo, &identity, None, Some("fixed"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.attributes.name.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_add_item_without_input_is_bad_input() {
        let repo = InMemoryRepository::new();
        let result = add_item(&repo, &user("u1"), None).await;
        assert_eq!(result, Err(ResolveError::MissingArgument("item")));
    }

    #[tokio::test]
    async fn test_update_missing_item_creates_it() {
        let repo = InMemoryRepository::new();
        let mut input = input("A");
        input.item_id = Some("new".to_string());

        let item = update_item(&repo, &user("u1"), Some(&input)).await.unwrap();

        assert_eq!(item.key(), ItemKey::new("u1", "new"));
        assert_eq!(
            repo.get_item(&ItemKey::new("u1", "new")).await.unwrap(),
            Some(item)
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_every_attribute() {
        let repo = InMemoryRepository::new();
        let identity = user("u1");
        let created = add_item(&repo, &identity, Some(&input("A"))).await.unwrap();

        let replacement = ItemInput {
            item_id: Some(created.item_id.clone()),
            attributes: ItemAttributes {
                role: Some("Lead".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        update_item(&repo, &identity, Some(&replacement))
            .await
            .unwrap();

        let stored = repo.get_item(&created.key()).await.unwrap().unwrap();
        assert_eq!(stored.attributes.name, None);
        assert_eq!(stored.attributes.field, None);
        assert_eq!(stored.attributes.role.as_deref(), Some("Lead"));
    }

    #[tokio::test]
    async fn test_update_requires_item_id() {
        let repo = InMemoryRepository::new();
        let result = update_item(&repo, &user("u1"), Some(&input("A"))).await;
        assert_eq!(result, Err(ResolveError::MissingArgument("item.itemId")));
    }

    #[tokio::test]
    async fn test_delete_missing_item_returns_key() {
        let repo = InMemoryRepository::new();

        let key = delete_item(&repo, &user("u1"), Some("ghost")).await.unwrap();

        assert_eq!(key, ItemKey::new("u1", "ghost"));
    }

    #[tokio::test]
    async fn test_delete_only_touches_callers_items() {
        let repo = InMemoryRepository::with_items([Item::new("u2", "shared-id")]);

        delete_item(&repo, &user("u1"), Some("shared-id"))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_anonymous_reads_use_argument_user() {
        let repo = InMemoryRepository::with_items([
            Item::new("u1", "i1").with_attributes(ItemAttributes {
                field: Some("Experience".to_string()),
                ..Default::default()
            }),
            Item::new("u1", "i2").with_attributes(ItemAttributes {
                field: Some("Skills".to_string()),
                ..Default::default()
            }),
        ]);

        let item = resolve_item(&repo, &Identity::Anonymous, Some("u1"), Some("i1"))
            .await
            .unwrap();
        assert!(item.is_some());

        let experience =
            resolve_field_items(&repo, &Identity::Anonymous, Some("u1"), Some("Experience"))
                .await
                .unwrap();
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].item_id, "i1");

        let all = resolve_resume_items(&repo, &Identity::Anonymous, Some("u1"))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_authenticated_reads_ignore_argument_user() {
        let repo = InMemoryRepository::with_items([Item::new("u1", "i1"), Item::new("u2", "i2")]);

        let items = resolve_resume_items(&repo, &user("u1"), Some("u2"))
            .await
            .unwrap();

        assert_eq!(items, vec![Item::new("u1", "i1")]);
    }

    #[tokio::test]
    async fn test_anonymous_read_without_user_is_bad_input() {
        let repo = InMemoryRepository::new();

        let result = resolve_resume_items(&repo, &Identity::Anonymous, None).await;

        assert_eq!(result.unwrap_err().code(), BAD_USER_INPUT);
    }

    #[tokio::test]
    async fn test_field_items_requires_field() {
        let repo = InMemoryRepository::new();
        let result = resolve_field_items(&repo, &user("u1"), None, None).await;
        assert_eq!(result, Err(ResolveError::MissingArgument("field")));
    }

    #[tokio::test]
    async fn test_storage_errors_pass_through() {
        struct Unavailable;

        #[async_trait::async_trait]
        impl ItemRepository for Unavailable {
            async fn get_item(&self, _: &ItemKey) -> resume_core::storage::Result<Option<Item>> {
                Err(RepositoryError::ConnectionFailed("unreachable".to_string()))
            }
            async fn query_by_field(
                &self,
                _: &str,
                _: &str,
            ) -> resume_core::storage::Result<Vec<Item>> {
                unimplemented!()
            }
            async fn query_by_user(&self, _: &str) -> resume_core::storage::Result<Vec<Item>> {
                unimplemented!()
            }
            async fn create_item(&self, _: &Item) -> resume_core::storage::Result<()> {
                unimplemented!()
            }
            async fn put_item(&self, _: &Item) -> resume_core::storage::Result<()> {
                unimplemented!()
            }
            async fn delete_item(&self, _: &ItemKey) -> resume_core::storage::Result<()> {
                unimplemented!()
            }
        }

        let result = resolve_item(&Unavailable, &user("u1"), None, Some("i1")).await;

        assert_eq!(
            result,
            Err(ResolveError::Repository(RepositoryError::ConnectionFailed(
                "unreachable".to_string()
            )))
        );
    }
}
