//! GraphQL surface: the `Item`/`InputItem` types and the two schemas.
//!
//! Anonymous requests run against [`PublicSchema`], which has no mutation
//! root. Requests carrying authorizer claims run against [`PrivateSchema`].

mod schema;
mod types;

pub use schema::{MutationRoot, PrivateSchema, PublicSchema, QueryRoot, ResumeSchemas};
pub use types::ItemObject;
