//! User directory reducer.

use iced::Task;
use log::{error, info, warn};
use userdeck_contracts::RegisterRequest;
use userdeck_model::{AccountStatus, UserId, UserRecord};

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult, RevocationReason,
};
use crate::domains::directory::messages::{BulkAction, Message};
use crate::domains::session;
use crate::state::State;

pub fn update_directory(
    state: &mut State,
    message: Message,
) -> DomainUpdateResult {
    match message {
        Message::Refresh => handle_refresh(state),
        Message::UsersLoaded(result) => handle_users_loaded(state, result),
        Message::BulkRequested { action, ids } => {
            handle_bulk_requested(state, action, ids)
        }
        Message::PrivilegeChecked {
            action,
            ids,
            result,
        } => handle_privilege_checked(state, action, ids, result),
        Message::BulkCompleted { action, result } => {
            handle_bulk_completed(state, action, result)
        }
        Message::RegisterSubmitted {
            email,
            name,
            password,
        } => handle_register_submitted(state, email, name, password),
        Message::RegisterCompleted {
            email,
            password,
            result,
        } => handle_register_completed(state, email, password, result),
    }
}

pub fn handle_refresh(state: &mut State) -> DomainUpdateResult {
    let directory = &mut state.domains.directory.state;
    directory.is_loading = true;
    directory.error = None;

    let user_admin = directory.user_admin.clone();
    DomainUpdateResult::task(Task::perform(
        async move { user_admin.list_users().await.map_err(|e| e.to_string()) },
        |result| DomainMessage::from(Message::UsersLoaded(result)),
    ))
}

/// A successful fetch replaces the entire collection; a failure leaves the
/// existing data untouched and records the error.
pub fn handle_users_loaded(
    state: &mut State,
    result: Result<Vec<UserRecord>, String>,
) -> DomainUpdateResult {
    let directory = &mut state.domains.directory.state;
    directory.is_loading = false;
    match result {
        Ok(users) => {
            info!("[Directory] Loaded {} users", users.len());
            directory.users = users;
        }
        Err(message) => {
            error!("[Directory] Failed to load users: {}", message);
            directory.error = Some(message);
        }
    }
    DomainUpdateResult::none()
}

/// Start a bulk action by re-confirming the operator's own standing, so a
/// stale privilege is never acted on. The ui layer has already rejected an
/// empty selection.
pub fn handle_bulk_requested(
    state: &mut State,
    action: BulkAction,
    ids: Vec<UserId>,
) -> DomainUpdateResult {
    let Some(operator) = state.domains.session.state.user.clone() else {
        warn!("[Directory] Bulk {} requested without a session", action.verb());
        return DomainUpdateResult::event(CrossDomainEvent::SessionRevoked(
            RevocationReason::PrivilegeCheckFailed,
        ));
    };

    info!(
        "[Directory] Re-checking own account before {} of {} users",
        action.verb(),
        ids.len()
    );

    let account = state.domains.directory.state.account.clone();
    DomainUpdateResult::task(Task::perform(
        async move {
            account
                .check_current_user(&operator.email)
                .await
                .map_err(|e| e.to_string())
        },
        move |result| {
            DomainMessage::from(Message::PrivilegeChecked {
                action,
                ids: ids.clone(),
                result,
            })
        },
    ))
}

/// Any failed or revoked answer aborts the action and ends the session.
pub fn handle_privilege_checked(
    state: &mut State,
    action: BulkAction,
    ids: Vec<UserId>,
    result: Result<AccountStatus, String>,
) -> DomainUpdateResult {
    match result {
        Ok(status) if !status.is_revoked() => {
            let user_admin = state.domains.directory.state.user_admin.clone();
            DomainUpdateResult::task(Task::perform(
                async move {
                    let outcome = match action {
                        BulkAction::Block => {
                            user_admin.block_users(&ids).await
                        }
                        BulkAction::Unblock => {
                            user_admin.unblock_users(&ids).await
                        }
                        BulkAction::Delete => {
                            user_admin.delete_users(&ids).await
                        }
                    };
                    outcome.map_err(|e| e.to_string())
                },
                move |result| {
                    DomainMessage::from(Message::BulkCompleted {
                        action,
                        result,
                    })
                },
            ))
        }
        Ok(status) => {
            warn!(
                "[Directory] Own account is {} - aborting {}",
                status,
                action.verb()
            );
            DomainUpdateResult::event(CrossDomainEvent::SessionRevoked(
                RevocationReason::PrivilegeCheckFailed,
            ))
        }
        Err(message) => {
            warn!(
                "[Directory] Privilege check failed before {}: {}",
                action.verb(),
                message
            );
            DomainUpdateResult::event(CrossDomainEvent::SessionRevoked(
                RevocationReason::PrivilegeCheckFailed,
            ))
        }
    }
}

/// Apply a confirmed bulk result, then run the self-affection check: the
/// post-condition lives here in the caller, not in the status flip itself.
pub fn handle_bulk_completed(
    state: &mut State,
    action: BulkAction,
    result: Result<Vec<UserId>, String>,
) -> DomainUpdateResult {
    match result {
        Ok(confirmed) => {
            info!(
                "[Directory] {} {} users",
                action.past_tense(),
                confirmed.len()
            );
            let directory = &mut state.domains.directory.state;
            match action {
                BulkAction::Block => {
                    directory.apply_status(&confirmed, AccountStatus::Blocked)
                }
                BulkAction::Unblock => {
                    directory.apply_status(&confirmed, AccountStatus::Active)
                }
                BulkAction::Delete => directory.remove(&confirmed),
            }

            let mut result =
                DomainUpdateResult::event(CrossDomainEvent::BulkActionCompleted {
                    action,
                    ids: confirmed.clone(),
                });

            // An absent operator counts as "not affected".
            if let Some(operator) = state.domains.session.state.user.as_ref() {
                if confirmed.contains(&operator.id) {
                    let event = match action {
                        BulkAction::Block => CrossDomainEvent::SessionRevoked(
                            RevocationReason::SelfBlocked,
                        ),
                        BulkAction::Delete => CrossDomainEvent::SessionRevoked(
                            RevocationReason::SelfDeleted,
                        ),
                        BulkAction::Unblock => {
                            CrossDomainEvent::SelfStatusChanged(
                                AccountStatus::Active,
                            )
                        }
                    };
                    result = result.add_event(event);
                }
            }
            result
        }
        Err(message) => {
            error!(
                "[Directory] Failed to {} users: {}",
                action.verb(),
                message
            );
            DomainUpdateResult::event(CrossDomainEvent::BulkActionFailed {
                action,
                message,
            })
        }
    }
}

pub fn handle_register_submitted(
    state: &mut State,
    email: String,
    name: String,
    password: String,
) -> DomainUpdateResult {
    info!("[Directory] Registering {}", email);
    let directory = &mut state.domains.directory.state;
    directory.is_loading = true;
    directory.error = None;

    let account = directory.account.clone();
    let request = RegisterRequest {
        email: email.clone(),
        name,
        password: password.clone(),
        role: "admin".to_string(),
        status: AccountStatus::Active,
    };
    DomainUpdateResult::task(Task::perform(
        async move { account.register(&request).await.map_err(|e| e.to_string()) },
        move |result| {
            DomainMessage::from(Message::RegisterCompleted {
                email: email.clone(),
                password: password.clone(),
                result,
            })
        },
    ))
}

/// On success the record is appended and the new user signed in with the
/// same credentials; on failure the error is recorded for the sign-up form.
pub fn handle_register_completed(
    state: &mut State,
    email: String,
    password: String,
    result: Result<UserRecord, String>,
) -> DomainUpdateResult {
    let directory = &mut state.domains.directory.state;
    directory.is_loading = false;
    match result {
        Ok(record) => {
            info!("[Directory] Registered {}", record.email);
            directory.users.push(record);
            DomainUpdateResult::task(Task::done(DomainMessage::from(
                session::messages::Message::LoginSubmitted { email, password },
            )))
        }
        Err(message) => {
            error!("[Directory] Registration failed: {}", message);
            directory.error = Some(message);
            DomainUpdateResult::none()
        }
    }
}
