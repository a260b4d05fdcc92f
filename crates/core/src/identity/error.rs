use thiserror::Error;

/// Errors that can occur when resolving who owns the targeted items.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Missing claim: {0}")]
    MissingClaim(&'static str),
    #[error("A userId is required for anonymous requests")]
    MissingUserId,
}
