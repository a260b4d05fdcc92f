use std::sync::Arc;

use async_graphql::{
    extensions::Tracing, Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object,
    Request, Response, Result, Schema,
};
use resume_core::identity::Identity;
use resume_core::item::ItemInput;
use resume_core::storage::ItemRepository;

use super::types::ItemObject;
use crate::resolvers;

/// Query-only schema served to anonymous callers.
pub type PublicSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Query and mutation schema served to callers with authorizer claims.
pub type PrivateSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

static ANONYMOUS: Identity = Identity::Anonymous;

fn repository<'a>(ctx: &Context<'a>) -> Result<&'a dyn ItemRepository> {
    Ok(ctx.data::<Arc<dyn ItemRepository>>()?.as_ref())
}

fn identity<'a>(ctx: &Context<'a>) -> &'a Identity {
    ctx.data_opt::<Identity>().unwrap_or(&ANONYMOUS)
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Liveness check.
    async fn ping(&self) -> Option<String> {
        Some("pong".to_string())
    }

    /// A single item by key.
    async fn item(
        &self,
        ctx: &Context<'_>,
        user_id: Option<String>,
        item_id: Option<String>,
    ) -> Result<Option<ItemObject>> {
        resolvers::resolve_item(
            repository(ctx)?,
            identity(ctx),
            user_id.as_deref(),
            item_id.as_deref(),
        )
        .await
        .map(|item| item.map(ItemObject::from))
        .map_err(|e| e.extend())
    }

    /// The items of one user belonging to one resume section.
    async fn field_items(
        &self,
        ctx: &Context<'_>,
        user_id: Option<String>,
        field: Option<String>,
    ) -> Result<Option<Vec<ItemObject>>> {
        resolvers::resolve_field_items(
            repository(ctx)?,
            identity(ctx),
            user_id.as_deref(),
            field.as_deref(),
        )
        .await
        .map(|items| Some(items.into_iter().map(ItemObject::from).collect()))
        .map_err(|e| e.extend())
    }

    /// Every item of one user.
    async fn resume_items(
        &self,
        ctx: &Context<'_>,
        user_id: Option<String>,
    ) -> Result<Option<Vec<ItemObject>>> {
        resolvers::resolve_resume_items(repository(ctx)?, identity(ctx), user_id.as_deref())
            .await
            .map(|items| Some(items.into_iter().map(ItemObject::from).collect()))
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates an item owned by the caller under a new `itemId`.
    async fn create_item(
        &self,
        ctx: &Context<'_>,
        item: Option<ItemObject>,
    ) -> Result<Option<ItemObject>> {
        let input = item.map(ItemInput::from);
        resolvers::add_item(repository(ctx)?, identity(ctx), input.as_ref())
            .await
            .map(|item| Some(item.into()))
            .map_err(|e| e.extend())
    }

    /// Overwrites (or creates) the caller's item with `item.itemId`.
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        item: Option<ItemObject>,
    ) -> Result<Option<ItemObject>> {
        let input = item.map(ItemInput::from);
        resolvers::update_item(repository(ctx)?, identity(ctx), input.as_ref())
            .await
            .map(|item| Some(item.into()))
            .map_err(|e| e.extend())
    }

    /// Deletes the caller's item and echoes its key.
    async fn delete_item(
        &self,
        ctx: &Context<'_>,
        item_id: Option<String>,
    ) -> Result<Option<ItemObject>> {
        resolvers::delete_item(repository(ctx)?, identity(ctx), item_id.as_deref())
            .await
            .map(|key| Some(key.into()))
            .map_err(|e| e.extend())
    }
}

/// The public and private schemas, built once per process.
#[derive(Clone)]
pub struct ResumeSchemas {
    pub public: PublicSchema,
    pub private: PrivateSchema,
}

impl ResumeSchemas {
    /// Builds both schemas over one repository handle.
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        let public = Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
            .data(repo.clone())
            .extension(Tracing)
            .finish();
        let private = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
            .data(repo)
            .extension(Tracing)
            .finish();

        Self { public, private }
    }

    /// Executes `request` as `identity`.
    ///
    /// Authenticated callers get the private schema; anonymous callers the
    /// public one, where mutations fail validation.
    pub async fn execute(&self, request: impl Into<Request>, identity: Identity) -> Response {
        let authenticated = identity.is_authenticated();
        let request = request.into().data(identity);

        if authenticated {
            self.private.execute(request).await
        } else {
            self.public.execute(request).await
        }
    }
}
