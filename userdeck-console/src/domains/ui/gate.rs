//! Authorization gate: pure derivation of the active route.

use crate::domains::ui::state_types::Screen;

/// The route the gate resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Home,
}

/// Derive the route to render from the authentication flag and the screen
/// the ui currently holds.
///
/// Signed-out sessions may only reach the login and signup routes; any
/// other screen resolves to login. Signed-in sessions always resolve to
/// home.
pub fn resolve(is_logged_in: bool, screen: &Screen) -> Route {
    if is_logged_in {
        Route::Home
    } else {
        match screen {
            Screen::Signup(_) => Route::Signup,
            Screen::Login(_) | Screen::Home(_) => Route::Login,
        }
    }
}
