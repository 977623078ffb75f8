//! Shared fixtures: in-memory service fakes and state builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use userdeck_console::common::messages::DomainMessage;
use userdeck_console::domains::session::messages::Message as SessionMessage;
use userdeck_console::infrastructure::errors::{ApiError, ApiResult};
use userdeck_console::infrastructure::services::account::AccountService;
use userdeck_console::infrastructure::services::user_admin::UserAdminService;
use userdeck_console::state::State;
use userdeck_console::update::update;
use userdeck_contracts::{LoginResponse, LoginUser, RegisterRequest};
use userdeck_model::{AccountStatus, UserId, UserRecord};

/// Scriptable stand-in for the account endpoints.
#[derive(Default)]
pub struct FakeAccountService {
    pub login_result: Mutex<Option<ApiResult<LoginResponse>>>,
    pub check_result: Mutex<Option<ApiResult<AccountStatus>>>,
    pub logout_calls: Mutex<usize>,
}

#[async_trait]
impl AccountService for FakeAccountService {
    async fn login(
        &self,
        _email: &str,
        _password: &str,
    ) -> ApiResult<LoginResponse> {
        self.login_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ApiError::Service("no login scripted".into())))
    }

    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> ApiResult<UserRecord> {
        Ok(UserRecord {
            id: UserId::from("new-user"),
            email: request.email.clone(),
            name: request.name.clone(),
            role: request.role.clone(),
            status: request.status,
            last_seen: Some(Utc::now()),
        })
    }

    async fn check_current_user(
        &self,
        _email: &str,
    ) -> ApiResult<AccountStatus> {
        self.check_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(AccountStatus::Active))
    }

    async fn logout(&self) {
        *self.logout_calls.lock().unwrap() += 1;
    }
}

/// Scriptable stand-in for the admin endpoints. Bulk calls echo the
/// requested ids by default, like a server that confirms everything.
#[derive(Default)]
pub struct FakeUserAdminService {
    pub list_result: Mutex<Option<ApiResult<Vec<UserRecord>>>>,
    pub bulk_result: Mutex<Option<ApiResult<Vec<UserId>>>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeUserAdminService {
    fn bulk(&self, name: &str, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.calls.lock().unwrap().push(name.to_string());
        self.bulk_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(ids.to_vec()))
    }
}

#[async_trait]
impl UserAdminService for FakeUserAdminService {
    async fn list_users(&self) -> ApiResult<Vec<UserRecord>> {
        self.calls.lock().unwrap().push("list".to_string());
        self.list_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ApiError::Service("no list scripted".into())))
    }

    async fn block_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.bulk("block", ids)
    }

    async fn unblock_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.bulk("unblock", ids)
    }

    async fn delete_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.bulk("delete", ids)
    }
}

/// Build a State wired against the fakes.
pub fn test_state() -> (State, Arc<FakeAccountService>, Arc<FakeUserAdminService>)
{
    let account = Arc::new(FakeAccountService::default());
    let user_admin = Arc::new(FakeUserAdminService::default());

    let mut state = State::new("http://localhost:3000".to_string());
    state.domains.session.state.account = account.clone();
    state.domains.directory.state.account = account.clone();
    state.domains.directory.state.user_admin = user_admin.clone();

    (state, account, user_admin)
}

pub fn user(id: &str, email: &str, name: &str, status: AccountStatus) -> UserRecord {
    UserRecord {
        id: UserId::from(id),
        email: email.to_string(),
        name: name.to_string(),
        role: "admin".to_string(),
        status,
        last_seen: Some(Utc::now()),
    }
}

pub fn login_response(id: &str, email: &str, token: &str) -> LoginResponse {
    LoginResponse {
        user: LoginUser {
            id: UserId::from(id),
            email: email.to_string(),
        },
        token: token.to_string(),
    }
}

/// Drive a full sign-in through the top-level update so the navigation and
/// refresh events run too.
pub fn sign_in(state: &mut State, id: &str, email: &str) {
    let _ = update(
        state,
        DomainMessage::from(SessionMessage::LoginCompleted(Ok(
            login_response(id, email, "T1"),
        ))),
    );
    assert!(state.is_logged_in(), "sign_in fixture should authenticate");
}
