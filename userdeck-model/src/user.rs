//! User directory records and account standing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Account standing as reported by the backend.
///
/// Some deployments still emit `"unblocked"` for accounts in good standing;
/// it is accepted on input as an alias of [`AccountStatus::Active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[serde(alias = "unblocked")]
    Active,
    Blocked,
    Deleted,
}

impl AccountStatus {
    /// Whether an account in this standing may keep an active session.
    pub fn is_revoked(&self) -> bool {
        matches!(self, AccountStatus::Blocked | AccountStatus::Deleted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Blocked => "blocked",
            AccountStatus::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user row mirrored from the directory endpoint.
///
/// The backend is the source of truth; the client holds these as a
/// read-through cache updated only by confirmed server results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub status: AccountStatus,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}
