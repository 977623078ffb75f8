//! Session-side types: the bearer token and the signed-in operator.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::user::AccountStatus;

/// Opaque bearer token issued by the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        AuthToken(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Token values never reach logs.
impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(***)")
    }
}

/// The authenticated operator, as held by the session store.
///
/// The status field mirrors what the server last reported for the
/// operator's own account and is mutated in place when that changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub token: AuthToken,
    pub status: AccountStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_debug_is_redacted() {
        let token = AuthToken::new("secret-value");
        assert_eq!(format!("{:?}", token), "AuthToken(***)");
        assert_eq!(token.as_str(), "secret-value");
    }
}
