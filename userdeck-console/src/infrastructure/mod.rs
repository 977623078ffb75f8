//! Infrastructure: the HTTP client and the service seams over it.

pub mod api_client;
pub mod errors;
pub mod services;
