//! Session reducer.

use iced::Task;
use log::{error, info};
use userdeck_contracts::LoginResponse;
use userdeck_model::{AccountStatus, AuthToken, CurrentUser};

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult, RevocationReason,
};
use crate::domains::session::messages::Message;
use crate::state::State;

pub fn update_session(
    state: &mut State,
    message: Message,
) -> DomainUpdateResult {
    match message {
        Message::LoginSubmitted { email, password } => {
            handle_login_submitted(state, email, password)
        }
        Message::LoginCompleted(result) => {
            handle_login_completed(state, result)
        }
        Message::Logout => handle_logout(state),
    }
}

/// Kick off the login round trip. The ui layer has already validated that
/// both fields are non-empty.
pub fn handle_login_submitted(
    state: &mut State,
    email: String,
    password: String,
) -> DomainUpdateResult {
    info!("[Session] Signing in as {}", email);
    let session = &mut state.domains.session.state;
    session.error = None;

    let account = session.account.clone();
    DomainUpdateResult::task(Task::perform(
        async move {
            account
                .login(&email, &password)
                .await
                .map_err(|e| e.to_string())
        },
        |result| DomainMessage::from(Message::LoginCompleted(result)),
    ))
}

pub fn handle_login_completed(
    state: &mut State,
    result: Result<LoginResponse, String>,
) -> DomainUpdateResult {
    match result {
        Ok(response) => {
            info!("[Session] Signed in as {}", response.user.email);
            let user = CurrentUser {
                id: response.user.id,
                email: response.user.email,
                token: AuthToken::new(response.token),
                status: AccountStatus::Active,
            };
            state.domains.session.state.login(user.clone());
            DomainUpdateResult::event(CrossDomainEvent::SessionEstablished(
                user,
            ))
        }
        Err(message) => {
            error!("[Session] Sign-in failed: {}", message);
            state.domains.session.state.set_error(message);
            DomainUpdateResult::none()
        }
    }
}

/// Operator-initiated sign out. State is reset by the revocation event so
/// every domain returns to its signed-out posture in the same update cycle.
pub fn handle_logout(_state: &mut State) -> DomainUpdateResult {
    info!("[Session] Signing out");
    DomainUpdateResult::event(CrossDomainEvent::SessionRevoked(
        RevocationReason::UserInitiated,
    ))
}
