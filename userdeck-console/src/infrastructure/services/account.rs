//! Account-facing endpoints: login, registration, and the self status
//! check that runs before every bulk action.

use std::sync::Arc;

use async_trait::async_trait;
use userdeck_contracts::{
    CheckCurrentUserRequest, CheckCurrentUserResponse, LoginRequest,
    LoginResponse, RegisterRequest, RegisterResponse,
};
use userdeck_model::{AccountStatus, AuthToken, UserRecord};

use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::errors::ApiResult;

#[async_trait]
pub trait AccountService: Send + Sync {
    /// Authenticate and install the issued bearer token.
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<LoginResponse>;

    /// Register a new account. Unauthenticated.
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> ApiResult<UserRecord>;

    /// Re-confirm the operator's own account status with the server.
    async fn check_current_user(
        &self,
        email: &str,
    ) -> ApiResult<AccountStatus>;

    /// Drop the stored bearer token.
    async fn logout(&self);
}

#[derive(Clone)]
pub struct AccountApiAdapter {
    client: Arc<ApiClient>,
}

impl AccountApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for AccountApiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountApiAdapter").finish_non_exhaustive()
    }
}

#[async_trait]
impl AccountService for AccountApiAdapter {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("/login", &body).await?;
        self.client
            .set_token(Some(AuthToken::new(response.token.clone())))
            .await;
        Ok(response)
    }

    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> ApiResult<UserRecord> {
        let response: RegisterResponse =
            self.client.post("/register", request).await?;
        Ok(response.user)
    }

    async fn check_current_user(
        &self,
        email: &str,
    ) -> ApiResult<AccountStatus> {
        self.client.require_token().await?;
        let body = CheckCurrentUserRequest {
            email: email.to_string(),
        };
        let response: CheckCurrentUserResponse =
            self.client.post("/check-current-user", &body).await?;
        Ok(response.user.status)
    }

    async fn logout(&self) {
        self.client.set_token(None).await;
    }
}
