//! Request/response bodies for the `/api/users` endpoints.

use serde::{Deserialize, Serialize};
use userdeck_model::{AccountStatus, UserId, UserRecord};

/// `POST /api/users/login` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Identity subset returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: UserId,
    pub email: String,
}

/// `POST /api/users/login` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub token: String,
}

/// `POST /api/users/register` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: String,
    pub status: AccountStatus,
}

/// `POST /api/users/register` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserRecord,
}

/// `POST /api/users/check-current-user` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCurrentUserRequest {
    pub email: String,
}

/// Status-only payload returned by the check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckedUser {
    pub status: AccountStatus,
}

/// `POST /api/users/check-current-user` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCurrentUserResponse {
    pub user: CheckedUser,
}

/// `GET /api/users` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserRecord>,
}

/// Request body shared by the block, unblock, and delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRequest {
    pub user_ids: Vec<UserId>,
}

/// Confirmation payload for the bulk endpoints: the ids the server acted on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResponse {
    pub user_ids: Vec<UserId>,
}

/// Error body carried by non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_request_uses_camel_case_on_the_wire() {
        let request = BulkRequest {
            user_ids: vec![UserId::from("u1"), UserId::from("u2")],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"userIds":["u1","u2"]}"#);
    }

    #[test]
    fn bulk_response_parses_confirmed_ids() {
        let response: BulkResponse =
            serde_json::from_str(r#"{"userIds":["u3"]}"#).unwrap();
        assert_eq!(response.user_ids, vec![UserId::from("u3")]);
    }

    #[test]
    fn login_response_parses_nested_identity() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"user":{"id":"u1","email":"a@x.com"},"token":"T1"}"#,
        )
        .unwrap();
        assert_eq!(response.user.id.as_str(), "u1");
        assert_eq!(response.token, "T1");
    }

    #[test]
    fn check_response_exposes_only_status() {
        let response: CheckCurrentUserResponse =
            serde_json::from_str(r#"{"user":{"status":"blocked"}}"#).unwrap();
        assert_eq!(response.user.status, AccountStatus::Blocked);
    }

    #[test]
    fn register_request_serializes_status_vocabulary() {
        let request = RegisterRequest {
            email: "a@x.com".into(),
            name: "Ada".into(),
            password: "p".into(),
            role: "admin".into(),
            status: AccountStatus::Active,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""status":"active""#));
    }
}
