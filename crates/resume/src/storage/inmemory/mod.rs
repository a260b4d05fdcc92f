//! In-memory storage backend.
//!
//! Stores items in a `BTreeMap` keyed by `(userId, itemId)` behind a
//! `tokio::sync::RwLock`. Semantics match the DynamoDB backend: duplicate
//! creates conflict, puts overwrite, deletes are idempotent. Nothing is
//! persisted.
//!
//! # Example
//!
//! ```rust
//! use resume::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
