//! UI domain: screens, forms, and routing.

pub mod gate;
pub mod messages;
pub mod state_types;
pub mod update;
pub mod views;

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::ui::state_types::{
    HomeView, LoginForm, Notice, Screen,
};

pub use state_types::UiDomainState;

#[derive(Debug)]
pub struct UiDomain {
    pub state: UiDomainState,
}

impl UiDomain {
    pub fn new(state: UiDomainState) -> Self {
        Self { state }
    }

    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            CrossDomainEvent::SessionEstablished(_) => {
                self.state.screen = Screen::Home(HomeView::default());
                Task::none()
            }
            CrossDomainEvent::SessionRevoked(_) => {
                self.state.screen = Screen::Login(LoginForm::default());
                Task::none()
            }
            CrossDomainEvent::BulkActionCompleted { action, ids } => {
                if let Screen::Home(home) = &mut self.state.screen {
                    home.selected.clear();
                    let joined = ids
                        .iter()
                        .map(|id| id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    home.notice = Some(Notice::info(format!(
                        "{} users with IDs: {}",
                        action.past_tense(),
                        joined
                    )));
                }
                Task::none()
            }
            CrossDomainEvent::BulkActionFailed { action, message } => {
                if let Screen::Home(home) = &mut self.state.screen {
                    home.notice = Some(Notice::error(format!(
                        "Failed to {} users: {}",
                        action.verb(),
                        message
                    )));
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }
}
