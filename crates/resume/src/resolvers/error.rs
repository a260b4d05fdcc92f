use async_graphql::ErrorExtensions;
use resume_core::identity::IdentityError;
use resume_core::storage::{repository_error_code, RepositoryError};
use thiserror::Error;

/// Code for a mutation attempted without usable identity claims.
pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
/// Code for a missing or unusable argument.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Errors a resolver can surface as a GraphQL field error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

impl ResolveError {
    /// The `extensions.code` reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Identity(IdentityError::Unauthenticated | IdentityError::MissingClaim(_)) => {
                UNAUTHENTICATED
            }
            Self::Identity(IdentityError::MissingUserId) | Self::MissingArgument(_) => {
                BAD_USER_INPUT
            }
            Self::Repository(err) => repository_error_code(err),
        }
    }

    /// Logs the failure of `resolver` at a level matching its cause.
    pub(crate) fn log(&self, resolver: &'static str) {
        match self {
            Self::Repository(RepositoryError::AlreadyExists { .. })
            | Self::Identity(_)
            | Self::MissingArgument(_) => {
                tracing::warn!(resolver, code = self.code(), error = %self, "Resolver rejected request");
            }
            Self::Repository(_) => {
                tracing::error!(resolver, code = self.code(), error = %self, "Storage call failed");
            }
        }
    }
}

impl ErrorExtensions for ResolveError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
