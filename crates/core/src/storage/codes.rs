//! Pure functions for mapping repository errors to GraphQL error codes.
//!
//! The code is attached to a field error under `extensions.code`, so clients
//! can tell a conflict apart from a storage outage without parsing messages.

use super::RepositoryError;

/// Code for a create that hit an existing key.
pub const CONFLICT: &str = "CONFLICT";
/// Code for any other storage failure.
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";

/// Maps a [`RepositoryError`] to a GraphQL error code.
///
/// - `AlreadyExists` -> `CONFLICT`
/// - everything else -> `STORAGE_ERROR`
///
/// # Examples
///
/// ```
/// use resume_core::storage::{repository_error_code, RepositoryError};
///
/// let error = RepositoryError::AlreadyExists {
///     entity_type: "Item",
///     id: "u1/abc".to_string(),
/// };
/// assert_eq!(repository_error_code(&error), "CONFLICT");
/// ```
pub fn repository_error_code(error: &RepositoryError) -> &'static str {
    match error {
        RepositoryError::AlreadyExists { .. } => CONFLICT,
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => STORAGE_ERROR,
    }
}
