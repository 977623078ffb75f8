//! Application assembly and boot.

use iced::{Task, Theme};

use crate::common::messages::DomainMessage;
use crate::state::State;
use crate::{update, view};

/// Runtime configuration resolved before the window opens.
#[derive(Clone, Debug)]
pub struct AppConfig {
    server_url: String,
}

impl AppConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    pub fn from_environment() -> Self {
        let server_url = std::env::var("USERDECK_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self { server_url }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Initial state, used both by the runtime application and by tests.
pub fn base_state(config: &AppConfig) -> State {
    State::new(config.server_url().to_string())
}

/// Boot logic for the running application.
///
/// There is no stored-session restore: the console always opens at the
/// sign-in screen.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    (base_state(config), Task::none())
}

/// Build and run the console application.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Userdeck", update::update, view::view)
        .theme(app_theme)
        .window(iced::window::Settings {
            size: iced::Size::new(1100.0, 720.0),
            ..Default::default()
        })
        .run_with(move || runtime_boot(&config))
}

fn app_theme(_state: &State) -> Theme {
    Theme::TokyoNight
}
