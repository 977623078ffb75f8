//! Session domain: the authentication store.
//!
//! Holds the signed-in operator (if any) and the last sign-in failure, and
//! owns every transition between the signed-out and signed-in states.

pub mod messages;
pub mod state_types;
pub mod update;

use iced::Task;
use log::info;

use crate::common::messages::{CrossDomainEvent, DomainMessage};

pub use state_types::SessionDomainState;

#[derive(Debug)]
pub struct SessionDomain {
    pub state: SessionDomainState,
}

impl SessionDomain {
    pub fn new(state: SessionDomainState) -> Self {
        Self { state }
    }

    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            CrossDomainEvent::SessionRevoked(reason) => {
                info!("[Session] Session revoked: {:?}", reason);
                self.state.reset();
                let account = self.state.account.clone();
                Task::perform(
                    async move { account.logout().await },
                    |_| DomainMessage::NoOp,
                )
            }
            CrossDomainEvent::SelfStatusChanged(status) => {
                // The revoking statuses arrive as SessionRevoked; a revoked
                // status landing here is handled the same way regardless.
                if status.is_revoked() {
                    self.state.reset();
                } else {
                    self.state.set_own_status(*status);
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }
}
