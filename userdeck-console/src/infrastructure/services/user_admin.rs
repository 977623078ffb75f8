//! Administrative endpoints over the user directory.

use std::sync::Arc;

use async_trait::async_trait;
use userdeck_contracts::{BulkRequest, BulkResponse, ListUsersResponse};
use userdeck_model::{UserId, UserRecord};

use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::errors::ApiResult;

#[async_trait]
pub trait UserAdminService: Send + Sync {
    /// Fetch the full user collection.
    async fn list_users(&self) -> ApiResult<Vec<UserRecord>>;

    /// Block the given users; returns the ids the server confirmed.
    async fn block_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>>;

    /// Unblock the given users; returns the ids the server confirmed.
    async fn unblock_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>>;

    /// Delete the given users; returns the ids the server confirmed.
    async fn delete_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>>;
}

#[derive(Clone)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn bulk(&self, path: &str, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.client.require_token().await?;
        let body = BulkRequest {
            user_ids: ids.to_vec(),
        };
        let response: BulkResponse = self.client.post(path, &body).await?;
        Ok(response.user_ids)
    }
}

impl std::fmt::Debug for UserAdminApiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAdminApiAdapter").finish_non_exhaustive()
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self) -> ApiResult<Vec<UserRecord>> {
        self.client.require_token().await?;
        let response: ListUsersResponse = self.client.get("").await?;
        Ok(response.users)
    }

    async fn block_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.bulk("/block", ids).await
    }

    async fn unblock_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.bulk("/unblock", ids).await
    }

    async fn delete_users(&self, ids: &[UserId]) -> ApiResult<Vec<UserId>> {
        self.bulk("/delete", ids).await
    }
}
