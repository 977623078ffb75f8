//! Session store transitions: login, logout, errors, and the secondary
//! status guard.

mod common;

use common::{login_response, sign_in, test_state, user};
use userdeck_console::common::messages::DomainMessage;
use userdeck_console::domains::session::messages::Message as SessionMessage;
use userdeck_console::domains::session::update as session_update;
use userdeck_console::domains::ui::state_types::Screen;
use userdeck_console::update::update;
use userdeck_model::AccountStatus;

#[test]
fn login_success_installs_operator_with_token() {
    let (mut state, _account, _admin) = test_state();

    let _ = session_update::handle_login_completed(
        &mut state,
        Ok(login_response("u1", "a@x.com", "T1")),
    );

    let session = &state.domains.session.state;
    assert!(session.is_logged_in());
    let operator = session.user.as_ref().expect("operator installed");
    assert_eq!(operator.id.as_str(), "u1");
    assert_eq!(operator.email, "a@x.com");
    assert_eq!(operator.token.as_str(), "T1");
    assert_eq!(operator.status, AccountStatus::Active);
    assert!(session.error.is_none());
}

#[test]
fn login_failure_records_error_and_stays_signed_out() {
    let (mut state, _account, _admin) = test_state();

    let _ = session_update::handle_login_completed(
        &mut state,
        Err("Invalid email or password".to_string()),
    );

    let session = &state.domains.session.state;
    assert!(!session.is_logged_in());
    assert!(session.user.is_none());
    assert_eq!(
        session.error.as_deref(),
        Some("Invalid email or password")
    );
}

#[test]
fn login_then_logout_returns_to_initial_state() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");

    let _ = update(&mut state, DomainMessage::from(SessionMessage::Logout));

    let session = &state.domains.session.state;
    assert!(session.user.is_none());
    assert!(session.error.is_none());
    assert!(!state.is_logged_in());
    assert!(matches!(state.domains.ui.state.screen, Screen::Login(_)));
}

#[test]
fn error_report_leaves_login_state_untouched() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");

    let _ = session_update::handle_login_completed(
        &mut state,
        Err("transient failure".to_string()),
    );

    let session = &state.domains.session.state;
    assert!(session.is_logged_in());
    assert_eq!(session.error.as_deref(), Some("transient failure"));
}

#[test]
fn session_established_navigates_home() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");

    assert!(matches!(state.domains.ui.state.screen, Screen::Home(_)));
}

#[test]
fn revoked_session_clears_the_directory() {
    let (mut state, _account, _admin) = test_state();
    sign_in(&mut state, "u1", "a@x.com");
    state.domains.directory.state.users = vec![
        user("u1", "a@x.com", "Ada", AccountStatus::Active),
        user("u2", "b@x.com", "Bob", AccountStatus::Active),
    ];

    let _ = update(&mut state, DomainMessage::from(SessionMessage::Logout));

    let directory = &state.domains.directory.state;
    assert!(directory.users.is_empty());
    assert!(directory.error.is_none());
    assert!(!directory.is_loading);
}
