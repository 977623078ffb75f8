//! Domain modules for the Userdeck console.
//!
//! State and update logic are organized into focused, testable domains:
//! the session store, the user directory store, and the ui/routing layer.

pub mod directory;
pub mod session;
pub mod ui;

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage};

/// Domain registry that manages all domain states.
#[derive(Debug)]
pub struct DomainRegistry {
    pub session: session::SessionDomain,
    pub directory: directory::DirectoryDomain,
    pub ui: ui::UiDomain,
}

impl DomainRegistry {
    /// Handle a cross-domain event by notifying every domain.
    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        Task::batch([
            self.session.handle_event(event),
            self.directory.handle_event(event),
            self.ui.handle_event(event),
        ])
    }
}
