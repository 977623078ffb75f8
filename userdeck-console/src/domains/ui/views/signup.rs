//! Sign-up screen.

use iced::widget::{Space, column, text_input};
use iced::{Alignment, Element, Length};

use super::components::{
    auth_card, auth_container, error_banner, link_button, primary_button,
    spacing, subtitle, title,
};
use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message;
use crate::domains::ui::state_types::SignupForm;
use crate::state::State;

pub fn view_signup<'a>(
    state: &'a State,
    form: &'a SignupForm,
) -> Element<'a, DomainMessage> {
    let mut content = column![
        title("Sign up"),
        subtitle("Create an administrator account"),
        spacing(),
    ];

    // Registration failures land in the directory store's error field.
    if let Some(error) = state.domains.directory.state.error.as_deref() {
        content = content.push(error_banner(error));
        content = content.push(Space::with_height(Length::Fixed(12.0)));
    } else if let Some(notice) = form.notice.as_deref() {
        content = content.push(error_banner(notice));
        content = content.push(Space::with_height(Length::Fixed(12.0)));
    }

    content = content.push(
        text_input("Email", &form.email)
            .on_input(|value| {
                DomainMessage::Ui(Message::SignupEmailChanged(value))
            })
            .padding(12)
            .size(16)
            .width(Length::Fill),
    );
    content = content.push(Space::with_height(Length::Fixed(8.0)));
    content = content.push(
        text_input("Name", &form.name)
            .on_input(|value| {
                DomainMessage::Ui(Message::SignupNameChanged(value))
            })
            .padding(12)
            .size(16)
            .width(Length::Fill),
    );
    content = content.push(Space::with_height(Length::Fixed(8.0)));
    content = content.push(
        text_input("Password", &form.password)
            .on_input(|value| {
                DomainMessage::Ui(Message::SignupPasswordChanged(value))
            })
            .on_submit(DomainMessage::Ui(Message::SignupSubmitted))
            .secure(true)
            .padding(12)
            .size(16)
            .width(Length::Fill),
    );
    content = content.push(spacing());
    content = content.push(
        primary_button("Sign Up")
            .on_press(DomainMessage::Ui(Message::SignupSubmitted)),
    );
    content = content.push(Space::with_height(Length::Fixed(12.0)));
    content = content.push(
        link_button("Already have an account? Sign in")
            .on_press(DomainMessage::Ui(Message::GoToLogin)),
    );

    auth_container(auth_card(content.align_x(Alignment::Center))).into()
}
