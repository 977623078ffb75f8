//! User directory domain.
//!
//! Mirrors the server's user collection and owns the bulk block, unblock,
//! and delete flows, including the pre-action privilege re-check and the
//! post-action self-affection check.

pub mod messages;
pub mod state_types;
pub mod update;

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage};

pub use state_types::DirectoryDomainState;

#[derive(Debug)]
pub struct DirectoryDomain {
    pub state: DirectoryDomainState,
}

impl DirectoryDomain {
    pub fn new(state: DirectoryDomainState) -> Self {
        Self { state }
    }

    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            CrossDomainEvent::SessionEstablished(_) => {
                Task::done(DomainMessage::from(messages::Message::Refresh))
            }
            CrossDomainEvent::SessionRevoked(_) => {
                self.state.clear();
                Task::none()
            }
            _ => Task::none(),
        }
    }
}
