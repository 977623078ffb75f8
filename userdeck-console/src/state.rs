//! Application state: the domain registry plus cross-cutting context.

use std::sync::Arc;

use crate::domains::DomainRegistry;
use crate::domains::directory::{DirectoryDomain, DirectoryDomainState};
use crate::domains::session::{SessionDomain, SessionDomainState};
use crate::domains::ui::{UiDomain, UiDomainState};
use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::services::account::{
    AccountApiAdapter, AccountService,
};
use crate::infrastructure::services::user_admin::{
    UserAdminApiAdapter, UserAdminService,
};

/// Application state, organized as a registry of domain slices.
#[derive(Debug)]
pub struct State {
    pub domains: DomainRegistry,
    pub server_url: String,
}

impl State {
    /// Create a new State wired against the given server.
    pub fn new(server_url: String) -> Self {
        let client = Arc::new(ApiClient::new(server_url.clone()));

        let account: Arc<dyn AccountService> =
            Arc::new(AccountApiAdapter::new(client.clone()));
        let user_admin: Arc<dyn UserAdminService> =
            Arc::new(UserAdminApiAdapter::new(client.clone()));

        let domains = DomainRegistry {
            session: SessionDomain::new(SessionDomainState::new(
                account.clone(),
            )),
            directory: DirectoryDomain::new(DirectoryDomainState::new(
                account, user_admin,
            )),
            ui: UiDomain::new(UiDomainState::default()),
        };

        Self {
            domains,
            server_url,
        }
    }

    /// Whether an operator is signed in.
    pub fn is_logged_in(&self) -> bool {
        self.domains.session.state.is_logged_in()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new("http://localhost:3000".to_string())
    }
}
