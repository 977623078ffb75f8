//! Wire contracts for the Userdeck Remote User Service.
//!
//! Request and response shapes for the `/api/users` endpoint family, kept
//! apart from the client model so both sides can evolve independently.

pub mod api;

pub use api::{
    BulkRequest, BulkResponse, CheckCurrentUserRequest,
    CheckCurrentUserResponse, CheckedUser, ErrorBody, ListUsersResponse,
    LoginRequest, LoginResponse, LoginUser, RegisterRequest, RegisterResponse,
};
