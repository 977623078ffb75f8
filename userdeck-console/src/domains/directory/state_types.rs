//! User directory store state.

use std::sync::Arc;

use userdeck_model::{AccountStatus, UserId, UserRecord};

use crate::infrastructure::services::account::AccountService;
use crate::infrastructure::services::user_admin::UserAdminService;

/// The mirrored user collection plus loading/error flags.
///
/// Mutations apply only server-confirmed results; a failed call leaves
/// `users` exactly as it was.
pub struct DirectoryDomainState {
    pub users: Vec<UserRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub account: Arc<dyn AccountService>,
    pub user_admin: Arc<dyn UserAdminService>,
}

impl DirectoryDomainState {
    pub fn new(
        account: Arc<dyn AccountService>,
        user_admin: Arc<dyn UserAdminService>,
    ) -> Self {
        Self {
            users: Vec::new(),
            is_loading: false,
            error: None,
            account,
            user_admin,
        }
    }

    /// Flip the status of every record whose id is in `ids`; records
    /// outside the set are untouched.
    pub fn apply_status(&mut self, ids: &[UserId], status: AccountStatus) {
        for user in self.users.iter_mut() {
            if ids.contains(&user.id) {
                user.status = status;
            }
        }
    }

    /// Remove every record whose id is in `ids`.
    pub fn remove(&mut self, ids: &[UserId]) {
        self.users.retain(|user| !ids.contains(&user.id));
    }

    /// Drop the mirrored data; used when the session ends.
    pub fn clear(&mut self) {
        self.users.clear();
        self.is_loading = false;
        self.error = None;
    }
}

impl std::fmt::Debug for DirectoryDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryDomainState")
            .field("users", &self.users.len())
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .field("account", &"AccountService(..)")
            .field("user_admin", &"UserAdminService(..)")
            .finish()
    }
}
