use userdeck_model::{AccountStatus, UserId, UserRecord};

/// A bulk mutation against the directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkAction {
    Block,
    Unblock,
    Delete,
}

impl BulkAction {
    pub fn verb(&self) -> &'static str {
        match self {
            BulkAction::Block => "block",
            BulkAction::Unblock => "unblock",
            BulkAction::Delete => "delete",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkAction::Block => "Blocked",
            BulkAction::Unblock => "Unblocked",
            BulkAction::Delete => "Deleted",
        }
    }
}

#[derive(Clone)]
pub enum Message {
    /// Reload the whole collection from the server.
    Refresh,
    /// Outcome of the list round trip.
    UsersLoaded(Result<Vec<UserRecord>, String>),

    /// A bulk action was requested with a validated, non-empty id set.
    BulkRequested {
        action: BulkAction,
        ids: Vec<UserId>,
    },
    /// Outcome of the pre-action privilege re-check.
    PrivilegeChecked {
        action: BulkAction,
        ids: Vec<UserId>,
        result: Result<AccountStatus, String>,
    },
    /// Outcome of the bulk round trip; `Ok` carries the confirmed ids.
    BulkCompleted {
        action: BulkAction,
        result: Result<Vec<UserId>, String>,
    },

    /// A new account was submitted from the sign-up form.
    RegisterSubmitted {
        email: String,
        name: String,
        password: String,
    },
    /// Outcome of the register round trip; credentials are threaded
    /// through so the new user can be signed in immediately.
    RegisterCompleted {
        email: String,
        password: String,
        result: Result<UserRecord, String>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Refresh => "Directory::Refresh",
            Self::UsersLoaded(_) => "Directory::UsersLoaded",
            Self::BulkRequested { .. } => "Directory::BulkRequested",
            Self::PrivilegeChecked { .. } => "Directory::PrivilegeChecked",
            Self::BulkCompleted { .. } => "Directory::BulkCompleted",
            Self::RegisterSubmitted { .. } => "Directory::RegisterSubmitted",
            Self::RegisterCompleted { .. } => "Directory::RegisterCompleted",
        }
    }
}

// Credentials never reach logs.
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refresh => write!(f, "Refresh"),
            Self::UsersLoaded(result) => write!(
                f,
                "UsersLoaded({:?})",
                result.as_ref().map(|users| users.len())
            ),
            Self::BulkRequested { action, ids } => {
                write!(f, "BulkRequested({:?}, {} ids)", action, ids.len())
            }
            Self::PrivilegeChecked { action, result, .. } => {
                write!(f, "PrivilegeChecked({:?}, {:?})", action, result)
            }
            Self::BulkCompleted { action, result } => {
                write!(f, "BulkCompleted({:?}, {:?})", action, result)
            }
            Self::RegisterSubmitted { email, name, .. } => {
                write!(f, "RegisterSubmitted({email}, {name}, ***)")
            }
            Self::RegisterCompleted { email, result, .. } => write!(
                f,
                "RegisterCompleted({email}, ***, {:?})",
                result.as_ref().map(|user| &user.id)
            ),
        }
    }
}
