//! User directory store: fetch, bulk mutations, privilege re-check, and
//! the self-affection post-condition.

mod common;

use std::sync::Arc;

use common::{sign_in, test_state, user};
use userdeck_console::common::messages::DomainMessage;
use userdeck_console::domains::directory::messages::{
    BulkAction, Message as DirectoryMessage,
};
use userdeck_console::domains::directory::update as directory_update;
use userdeck_console::domains::ui::state_types::Screen;
use userdeck_console::infrastructure::api_client::ApiClient;
use userdeck_console::infrastructure::errors::ApiError;
use userdeck_console::infrastructure::services::user_admin::{
    UserAdminApiAdapter, UserAdminService,
};
use userdeck_console::update::update;
use userdeck_model::{AccountStatus, UserId};

#[test]
fn fetch_success_replaces_the_collection() {
    let (mut state, _account, _admin) = test_state();
    state.domains.directory.state.users =
        vec![user("old", "old@x.com", "Old", AccountStatus::Active)];

    let _ = directory_update::handle_users_loaded(
        &mut state,
        Ok(vec![
            user("u1", "a@x.com", "Ada", AccountStatus::Active),
            user("u2", "b@x.com", "Bob", AccountStatus::Blocked),
        ]),
    );

    let directory = &state.domains.directory.state;
    assert_eq!(directory.users.len(), 2);
    assert!(directory.users.iter().all(|u| u.id.as_str() != "old"));
    assert!(!directory.is_loading);
    assert!(directory.error.is_none());
}

#[test]
fn fetch_failure_leaves_the_collection_untouched() {
    let (mut state, _account, _admin) = test_state();
    let before = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Active),
        user("u2", "b@x.com", "Bob", AccountStatus::Blocked),
    ];
    state.domains.directory.state.users = before.clone();

    let _ = directory_update::handle_users_loaded(
        &mut state,
        Err("Failed to fetch users".to_string()),
    );

    let directory = &state.domains.directory.state;
    assert_eq!(directory.users, before);
    assert!(!directory.is_loading);
    assert_eq!(directory.error.as_deref(), Some("Failed to fetch users"));
}

#[test]
fn refresh_marks_loading_and_clears_the_error() {
    let (mut state, _account, _admin) = test_state();
    state.domains.directory.state.error = Some("stale".to_string());

    let _ = directory_update::handle_refresh(&mut state);

    let directory = &state.domains.directory.state;
    assert!(directory.is_loading);
    assert!(directory.error.is_none());
}

#[tokio::test]
async fn tokenless_fetch_rejects_with_unauthenticated() {
    let client = Arc::new(ApiClient::new("http://localhost:3000".to_string()));
    let adapter = UserAdminApiAdapter::new(client);

    let err = adapter.list_users().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthenticated);

    // Fed back through the store, the rejection settles the flags.
    let (mut state, _account, _admin) = test_state();
    let _ = directory_update::handle_refresh(&mut state);
    let _ = directory_update::handle_users_loaded(
        &mut state,
        Err(err.to_string()),
    );

    let directory = &state.domains.directory.state;
    assert!(!directory.is_loading);
    assert_eq!(directory.error.as_deref(), Some("not authenticated"));
}

#[test]
fn block_flips_only_matching_records() {
    let (mut state, _account, _admin) = test_state();
    state.domains.directory.state.users = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Active),
        user("u2", "b@x.com", "Bob", AccountStatus::Active),
    ];

    let _ = directory_update::handle_bulk_completed(
        &mut state,
        BulkAction::Block,
        Ok(vec![UserId::from("u2")]),
    );

    let users = &state.domains.directory.state.users;
    assert_eq!(users[0].status, AccountStatus::Active);
    assert_eq!(users[1].status, AccountStatus::Blocked);
}

#[test]
fn unblock_marks_matching_records_active() {
    let (mut state, _account, _admin) = test_state();
    state.domains.directory.state.users = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Blocked),
        user("u2", "b@x.com", "Bob", AccountStatus::Blocked),
    ];

    let _ = directory_update::handle_bulk_completed(
        &mut state,
        BulkAction::Unblock,
        Ok(vec![UserId::from("u1")]),
    );

    let users = &state.domains.directory.state.users;
    assert_eq!(users[0].status, AccountStatus::Active);
    assert_eq!(users[1].status, AccountStatus::Blocked);
}

#[test]
fn delete_removes_confirmed_records() {
    let (mut state, _account, _admin) = test_state();
    state.domains.directory.state.users = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Active),
        user("u2", "b@x.com", "Bob", AccountStatus::Active),
    ];

    let _ = directory_update::handle_bulk_completed(
        &mut state,
        BulkAction::Delete,
        Ok(vec![UserId::from("u2")]),
    );

    let users = &state.domains.directory.state.users;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id.as_str(), "u1");
}

#[test]
fn delete_then_fetch_never_reintroduces_the_id() {
    let (mut state, _account, _admin) = test_state();
    state.domains.directory.state.users = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Active),
        user("u2", "b@x.com", "Bob", AccountStatus::Active),
    ];

    let _ = directory_update::handle_bulk_completed(
        &mut state,
        BulkAction::Delete,
        Ok(vec![UserId::from("u2")]),
    );

    // The next fetch returns server truth, which no longer contains u2.
    let _ = directory_update::handle_users_loaded(
        &mut state,
        Ok(vec![user("u1", "a@x.com", "Ada", AccountStatus::Active)]),
    );

    assert!(
        state
            .domains
            .directory
            .state
            .users
            .iter()
            .all(|u| u.id.as_str() != "u2")
    );
}

#[test]
fn bulk_failure_leaves_the_collection_untouched() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");
    let before = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Active),
        user("u2", "b@x.com", "Bob", AccountStatus::Active),
    ];
    state.domains.directory.state.users = before.clone();

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::BulkCompleted {
            action: BulkAction::Block,
            result: Err("Failed to block users".to_string()),
        }),
    );

    assert_eq!(state.domains.directory.state.users, before);
    // the failure surfaces as a notice on the home screen
    match &state.domains.ui.state.screen {
        Screen::Home(home) => {
            let notice = home.notice.as_ref().expect("notice shown");
            assert!(notice.text.contains("Failed to block users"));
        }
        other => panic!("unexpected screen: {:?}", other),
    }
}

#[test]
fn self_block_ends_the_session_logged_out() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");
    state.domains.directory.state.users = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Active),
        user("u2", "b@x.com", "Bob", AccountStatus::Active),
    ];

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::BulkCompleted {
            action: BulkAction::Block,
            result: Ok(vec![UserId::from("u1"), UserId::from("u2")]),
        }),
    );

    assert!(!state.is_logged_in());
    assert!(matches!(state.domains.ui.state.screen, Screen::Login(_)));
}

#[test]
fn self_delete_ends_the_session_logged_out() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");
    state.domains.directory.state.users =
        vec![user("u1", "a@x.com", "Ada", AccountStatus::Active)];

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::BulkCompleted {
            action: BulkAction::Delete,
            result: Ok(vec![UserId::from("u1")]),
        }),
    );

    assert!(!state.is_logged_in());
    assert!(matches!(state.domains.ui.state.screen, Screen::Login(_)));
}

#[test]
fn self_unblock_marks_own_status_active() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");
    state
        .domains
        .session
        .state
        .set_own_status(AccountStatus::Blocked);
    state.domains.directory.state.users =
        vec![user("u1", "a@x.com", "Ada", AccountStatus::Blocked)];

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::BulkCompleted {
            action: BulkAction::Unblock,
            result: Ok(vec![UserId::from("u1")]),
        }),
    );

    let session = &state.domains.session.state;
    assert!(session.is_logged_in());
    assert_eq!(
        session.user.as_ref().map(|u| u.status),
        Some(AccountStatus::Active)
    );
}

#[test]
fn absent_operator_counts_as_not_affected() {
    let (mut state, _account, _admin) = test_state();
    state.domains.directory.state.users =
        vec![user("u1", "a@x.com", "Ada", AccountStatus::Active)];

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::BulkCompleted {
            action: BulkAction::Block,
            result: Ok(vec![UserId::from("u1")]),
        }),
    );

    assert!(!state.is_logged_in());
    assert_eq!(
        state.domains.directory.state.users[0].status,
        AccountStatus::Blocked
    );
}

#[test]
fn privilege_check_failure_revokes_the_session() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::PrivilegeChecked {
            action: BulkAction::Block,
            ids: vec![UserId::from("u2")],
            result: Err("network down".to_string()),
        }),
    );

    assert!(!state.is_logged_in());
    assert!(matches!(state.domains.ui.state.screen, Screen::Login(_)));
}

#[test]
fn privilege_check_revoked_status_aborts_the_action() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::PrivilegeChecked {
            action: BulkAction::Delete,
            ids: vec![UserId::from("u2")],
            result: Ok(AccountStatus::Blocked),
        }),
    );

    assert!(!state.is_logged_in());
}

#[test]
fn privilege_check_active_status_keeps_the_session() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");

    let _ = update(
        &mut state,
        DomainMessage::from(DirectoryMessage::PrivilegeChecked {
            action: BulkAction::Block,
            ids: vec![UserId::from("u2")],
            result: Ok(AccountStatus::Active),
        }),
    );

    assert!(state.is_logged_in());
}

#[test]
fn register_success_appends_the_returned_record() {
    let (mut state, _account, _admin) = test_state();

    let _ = directory_update::handle_register_completed(
        &mut state,
        "c@x.com".to_string(),
        "p".to_string(),
        Ok(user("u3", "c@x.com", "Cay", AccountStatus::Active)),
    );

    let directory = &state.domains.directory.state;
    assert!(!directory.is_loading);
    assert_eq!(directory.users.len(), 1);
    assert_eq!(directory.users[0].id.as_str(), "u3");
}

#[test]
fn register_failure_records_the_error() {
    let (mut state, _account, _admin) = test_state();

    let _ = directory_update::handle_register_completed(
        &mut state,
        "c@x.com".to_string(),
        "p".to_string(),
        Err("Failed to create user".to_string()),
    );

    let directory = &state.domains.directory.state;
    assert!(!directory.is_loading);
    assert!(directory.users.is_empty());
    assert_eq!(directory.error.as_deref(), Some("Failed to create user"));
}
