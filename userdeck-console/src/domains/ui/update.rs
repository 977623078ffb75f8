//! UI reducer: form edits, client-side validation, and navigation.

use iced::Task;
use log::info;
use userdeck_model::UserId;

use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::directory::messages::{
    BulkAction, Message as DirectoryMessage,
};
use crate::domains::session::messages::Message as SessionMessage;
use crate::domains::ui::messages::Message;
use crate::domains::ui::state_types::{
    LoginForm, Notice, Screen, SignupForm,
};
use crate::state::State;

pub fn update_ui(state: &mut State, message: Message) -> DomainUpdateResult {
    match message {
        Message::LoginEmailChanged(value) => {
            if let Screen::Login(form) = &mut state.domains.ui.state.screen {
                form.email = value;
            }
            DomainUpdateResult::none()
        }
        Message::LoginPasswordChanged(value) => {
            if let Screen::Login(form) = &mut state.domains.ui.state.screen {
                form.password = value;
            }
            DomainUpdateResult::none()
        }
        Message::LoginSubmitted => handle_login_submitted(state),

        Message::SignupEmailChanged(value) => {
            if let Screen::Signup(form) = &mut state.domains.ui.state.screen {
                form.email = value;
            }
            DomainUpdateResult::none()
        }
        Message::SignupNameChanged(value) => {
            if let Screen::Signup(form) = &mut state.domains.ui.state.screen {
                form.name = value;
            }
            DomainUpdateResult::none()
        }
        Message::SignupPasswordChanged(value) => {
            if let Screen::Signup(form) = &mut state.domains.ui.state.screen {
                form.password = value;
            }
            DomainUpdateResult::none()
        }
        Message::SignupSubmitted => handle_signup_submitted(state),

        Message::GoToLogin => {
            state.domains.ui.state.screen =
                Screen::Login(LoginForm::default());
            state.domains.session.state.error = None;
            state.domains.directory.state.error = None;
            DomainUpdateResult::none()
        }
        Message::GoToSignup => {
            state.domains.ui.state.screen =
                Screen::Signup(SignupForm::default());
            state.domains.session.state.error = None;
            state.domains.directory.state.error = None;
            DomainUpdateResult::none()
        }

        Message::FilterChanged(value) => {
            if let Screen::Home(home) = &mut state.domains.ui.state.screen {
                home.filter = value;
            }
            DomainUpdateResult::none()
        }
        Message::ToggleEmailSort => {
            if let Screen::Home(home) = &mut state.domains.ui.state.screen {
                home.sort_order = home.sort_order.toggled();
            }
            DomainUpdateResult::none()
        }
        Message::RowToggled(id) => {
            if let Screen::Home(home) = &mut state.domains.ui.state.screen {
                home.toggle_selected(id);
            }
            DomainUpdateResult::none()
        }
        Message::SelectAllToggled => {
            let users = state.domains.directory.state.users.clone();
            if let Screen::Home(home) = &mut state.domains.ui.state.screen {
                home.toggle_select_all(&users);
            }
            DomainUpdateResult::none()
        }

        Message::BlockPressed => {
            handle_bulk_pressed(state, BulkAction::Block)
        }
        Message::UnblockPressed => {
            handle_bulk_pressed(state, BulkAction::Unblock)
        }
        Message::DeletePressed => {
            handle_bulk_pressed(state, BulkAction::Delete)
        }

        Message::SignOutPressed => DomainUpdateResult::task(Task::done(
            DomainMessage::from(SessionMessage::Logout),
        )),
        Message::DismissNotice => {
            if let Screen::Home(home) = &mut state.domains.ui.state.screen {
                home.notice = None;
            }
            DomainUpdateResult::none()
        }
    }
}

/// Validate the sign-in form; missing credentials never reach the network.
pub fn handle_login_submitted(state: &mut State) -> DomainUpdateResult {
    let Screen::Login(form) = &mut state.domains.ui.state.screen else {
        return DomainUpdateResult::none();
    };

    let email = form.email.trim().to_string();
    let password = form.password.clone();
    if email.is_empty() || password.is_empty() {
        form.notice = Some("Email and password are required.".to_string());
        return DomainUpdateResult::none();
    }
    form.notice = None;

    DomainUpdateResult::task(Task::done(DomainMessage::from(
        SessionMessage::LoginSubmitted { email, password },
    )))
}

/// Validate the sign-up form; missing fields never reach the network.
pub fn handle_signup_submitted(state: &mut State) -> DomainUpdateResult {
    let Screen::Signup(form) = &mut state.domains.ui.state.screen else {
        return DomainUpdateResult::none();
    };

    let email = form.email.trim().to_string();
    let name = form.name.trim().to_string();
    let password = form.password.clone();
    if email.is_empty() || name.is_empty() || password.is_empty() {
        form.notice =
            Some("Email, name, and password are required.".to_string());
        return DomainUpdateResult::none();
    }
    form.notice = None;

    DomainUpdateResult::task(Task::done(DomainMessage::from(
        DirectoryMessage::RegisterSubmitted {
            email,
            name,
            password,
        },
    )))
}

/// Reject an empty selection before dispatching a bulk action.
pub fn handle_bulk_pressed(
    state: &mut State,
    action: BulkAction,
) -> DomainUpdateResult {
    let Screen::Home(home) = &mut state.domains.ui.state.screen else {
        return DomainUpdateResult::none();
    };

    if home.selected.is_empty() {
        home.notice = Some(Notice::error("No users selected!"));
        return DomainUpdateResult::none();
    }
    home.notice = None;

    let ids: Vec<UserId> = home.selected.iter().cloned().collect();
    info!(
        "[Ui] Dispatching {} for {} selected users",
        action.verb(),
        ids.len()
    );
    DomainUpdateResult::task(Task::done(DomainMessage::from(
        DirectoryMessage::BulkRequested { action, ids },
    )))
}
