use super::{Identity, IdentityError, USERNAME_CLAIM};

/// Resolves the owner of the items a read operation targets.
///
/// Authenticated callers always read their own items: the username claim
/// wins over any requested user. Anonymous callers read the items of the
/// user they name, unverified ("public resume" lookups).
pub fn resolve_user_id(
    identity: &Identity,
    requested: Option<&str>,
) -> Result<String, IdentityError> {
    match identity {
        Identity::Authenticated(_) => require_user_id(identity),
        Identity::Anonymous => requested
            .map(str::to_string)
            .ok_or(IdentityError::MissingUserId),
    }
}

/// Returns the caller's verified username, failing for anonymous callers.
pub fn require_user_id(identity: &Identity) -> Result<String, IdentityError> {
    let claims = identity.claims().ok_or(IdentityError::Unauthenticated)?;
    claims
        .username()
        .map(str::to_string)
        .ok_or(IdentityError::MissingClaim(USERNAME_CLAIM))
}
