//! HTTP client for the Remote User Service.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use userdeck_contracts::ErrorBody;
use userdeck_model::AuthToken;

use crate::infrastructure::errors::{ApiError, ApiResult};

/// API client with bearer-token authentication support.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<RwLock<Option<AuthToken>>>,
}

impl ApiClient {
    /// Create a new API client against the given server.
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        log::info!("[ApiClient] Base URL: {}", base_url);

        Self {
            client,
            base_url,
            token_store: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a URL under the `/api/users` endpoint family.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/api/users{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Set the authentication token.
    pub async fn set_token(&self, token: Option<AuthToken>) {
        *self.token_store.write().await = token;
    }

    /// Get the current authentication token.
    pub async fn token(&self) -> Option<AuthToken> {
        self.token_store.read().await.clone()
    }

    /// Reject before any network traffic when no token is held.
    pub async fn require_token(&self) -> ApiResult<()> {
        if self.token_store.read().await.is_some() {
            Ok(())
        } else {
            Err(ApiError::Unauthenticated)
        }
    }

    /// Attach the bearer header when a token is held.
    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder
                .header("Authorization", format!("Bearer {}", token.as_str()))
        } else {
            builder
        }
    }

    /// Execute a request and handle the common error shapes.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            StatusCode::UNAUTHORIZED => {
                // The token expired or was revoked; drop it
                self.set_token(None).await;
                Err(ApiError::Unauthenticated)
            }
            status => {
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .map(|body| body.error)
                    .unwrap_or_else(|_| {
                        format!("request failed with status {status}")
                    });
                Err(ApiError::Service(message))
            }
        }
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET {}", url);
        let request = self.authorize(self.client.get(&url)).await;
        self.execute(request).await
    }

    /// POST request.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] POST {}", url);
        let request = self.authorize(self.client.post(&url).json(body)).await;
        self.execute(request).await
    }
}
