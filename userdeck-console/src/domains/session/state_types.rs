//! Session store state.

use std::sync::Arc;

use userdeck_model::{AccountStatus, CurrentUser};

use crate::infrastructure::services::account::AccountService;

/// Authentication state: the signed-in operator and the last sign-in error.
///
/// `user` being `Some` is the logged-in flag; the data-model invariant
/// (`user` present exactly when logged in) is structural.
pub struct SessionDomainState {
    pub user: Option<CurrentUser>,
    pub error: Option<String>,
    pub account: Arc<dyn AccountService>,
}

impl SessionDomainState {
    pub fn new(account: Arc<dyn AccountService>) -> Self {
        Self {
            user: None,
            error: None,
            account,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Install a freshly authenticated operator.
    pub fn login(&mut self, user: CurrentUser) {
        self.user = Some(user);
        self.error = None;
    }

    /// Return to the initial signed-out state.
    pub fn reset(&mut self) {
        self.user = None;
        self.error = None;
    }

    /// Record a sign-in or sign-up failure without touching the flag.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Mutate only the operator's own mirrored status.
    pub fn set_own_status(&mut self, status: AccountStatus) {
        if let Some(user) = self.user.as_mut() {
            user.status = status;
        }
    }
}

impl std::fmt::Debug for SessionDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDomainState")
            .field("user", &self.user)
            .field("error", &self.error)
            .field("account", &"AccountService(..)")
            .finish()
    }
}
