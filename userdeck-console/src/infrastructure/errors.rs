//! Error types for calls against the Remote User Service.

use thiserror::Error;

/// Errors produced by the API client and the service adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No token is held, or the server rejected the one presented.
    #[error("not authenticated")]
    Unauthenticated,

    /// The server answered non-2xx; carries the server's error message.
    #[error("{0}")]
    Service(String),

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the contract.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Result type alias for service operations.
pub type ApiResult<T> = Result<T, ApiError>;
