//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ItemRepository`
//! trait defined in `resume_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled. It backs the tests and the
//! `serve --in-memory` development mode, and is the fallback when the
//! binary is built without `dynamodb`.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p resume
//! ```
//!
//! Build without AWS dependencies:
//! ```bash
//! cargo build -p resume --no-default-features
//! ```

use std::sync::Arc;

use resume_core::storage::{ItemRepository, Result};

use crate::config::Config;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;

/// Builds the repository selected by the enabled features.
///
/// `in_memory` forces the in-memory backend regardless of features.
pub async fn build_repository(
    config: &Config,
    in_memory: bool,
) -> Result<Arc<dyn ItemRepository>> {
    if in_memory {
        tracing::info!("Using in-memory item storage");
        return Ok(Arc::new(InMemoryRepository::new()));
    }

    #[cfg(feature = "dynamodb")]
    {
        let repo = DynamoDbRepository::from_config(config).await?;
        tracing::info!(
            table = repo.table_name(),
            index = repo.field_index(),
            "Using DynamoDB item storage"
        );
        Ok(Arc::new(repo))
    }

    #[cfg(not(feature = "dynamodb"))]
    {
        tracing::warn!(
            table = %config.table_name,
            "Built without the `dynamodb` feature, using in-memory item storage"
        );
        Ok(Arc::new(InMemoryRepository::new()))
    }
}
