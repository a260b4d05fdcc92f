use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claim holding the verified username. Items are owned by this value.
pub const USERNAME_CLAIM: &str = "cognito:username";
/// Claim holding the caller's stable subject identifier.
pub const SUBJECT_CLAIM: &str = "sub";
/// Claim holding the caller's display name.
pub const NAME_CLAIM: &str = "name";

/// Verified identity claims injected by the upstream authorizer.
///
/// Trusted as-is; nothing here re-verifies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(BTreeMap<String, Value>);

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string claim.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), Value::String(value.into()));
        self
    }

    /// Returns a claim as a string, if present and a string.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// The verified username (`cognito:username`).
    pub fn username(&self) -> Option<&str> {
        self.get(USERNAME_CLAIM)
    }

    /// The subject identifier (`sub`).
    pub fn subject(&self) -> Option<&str> {
        self.get(SUBJECT_CLAIM)
    }

    /// The display name (`name`).
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_CLAIM)
    }
}

impl FromIterator<(String, Value)> for Claims {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Who is making a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Identity {
    /// No authorizer claims were present.
    #[default]
    Anonymous,
    /// The authorizer verified the caller and supplied these claims.
    Authenticated(Claims),
}

impl Identity {
    /// Builds an identity from optional authorizer claims.
    pub fn from_claims(claims: Option<Claims>) -> Self {
        match claims {
            Some(claims) => Self::Authenticated(claims),
            None => Self::Anonymous,
        }
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Self::Authenticated(claims) => Some(claims),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_accessors() {
        let claims = Claims::new()
            .with(USERNAME_CLAIM, "u1")
            .with(SUBJECT_CLAIM, "sub-123")
            .with(NAME_CLAIM, "Ada");

        assert_eq!(claims.username(), Some("u1"));
        assert_eq!(claims.subject(), Some("sub-123"));
        assert_eq!(claims.name(), Some("Ada"));
        assert_eq!(claims.get("email"), None);
    }

    #[test]
    fn test_claims_deserialize_from_authorizer_map() {
        let claims: Claims = serde_json::from_str(
            r#"{"cognito:username": "u1", "sub": "abc", "email_verified": true}"#,
        )
        .unwrap();

        assert_eq!(claims.username(), Some("u1"));
        assert_eq!(claims.subject(), Some("abc"));
        // Non-string claims are kept but not readable as strings
        assert_eq!(claims.get("email_verified"), None);
    }

    #[test]
    fn test_identity_from_claims() {
        assert_eq!(Identity::from_claims(None), Identity::Anonymous);

        let identity = Identity::from_claims(Some(Claims::new().with(USERNAME_CLAIM, "u1")));
        assert!(identity.is_authenticated());
        assert_eq!(identity.claims().and_then(Claims::username), Some("u1"));
    }
}
