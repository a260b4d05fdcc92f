//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ItemRepository`
//! using `aws-sdk-dynamodb`. The table is keyed by `userId` (partition) and
//! `itemId` (sort), with a secondary index on `(userId, field)`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
