//! Root-level view composition: the authorization gate.

use iced::Element;

use crate::common::messages::DomainMessage;
use crate::domains::ui::gate::{self, Route};
use crate::domains::ui::state_types::{LoginForm, Screen, SignupForm};
use crate::domains::ui::views::{home, login, signup};
use crate::state::State;

// Fallbacks for the redirect cases where the held screen does not match
// the resolved route; the screen catches up through events.
static EMPTY_LOGIN: LoginForm = LoginForm {
    email: String::new(),
    password: String::new(),
    notice: None,
};
static EMPTY_SIGNUP: SignupForm = SignupForm {
    email: String::new(),
    name: String::new(),
    password: String::new(),
    notice: None,
};

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let screen = &state.domains.ui.state.screen;

    match gate::resolve(state.is_logged_in(), screen) {
        Route::Home => home::view_home(state),
        Route::Login => {
            let form = match screen {
                Screen::Login(form) => form,
                _ => &EMPTY_LOGIN,
            };
            login::view_login(state, form)
        }
        Route::Signup => {
            let form = match screen {
                Screen::Signup(form) => form,
                _ => &EMPTY_SIGNUP,
            };
            signup::view_signup(state, form)
        }
    }
}
