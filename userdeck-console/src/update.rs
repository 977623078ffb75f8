//! Root-level update: routes messages to the domain reducers, then
//! broadcasts the cross-domain events they emit.

use iced::Task;
use log::debug;

use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::{directory, session, ui};
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    debug!("update: {}", message.name());

    let result = match message {
        DomainMessage::Session(msg) => {
            session::update::update_session(state, msg)
        }
        DomainMessage::Directory(msg) => {
            directory::update::update_directory(state, msg)
        }
        DomainMessage::Ui(msg) => ui::update::update_ui(state, msg),
        DomainMessage::Event(event) => {
            return state.domains.handle_event(&event);
        }
        DomainMessage::NoOp => DomainUpdateResult::none(),
    };

    let mut tasks = vec![result.task];
    for event in &result.events {
        tasks.push(state.domains.handle_event(event));
    }
    Task::batch(tasks)
}
