//! Sign-in screen.

use iced::widget::{Space, column, text_input};
use iced::{Alignment, Element, Length};

use super::components::{
    auth_card, auth_container, error_banner, link_button, primary_button,
    spacing, subtitle, title,
};
use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message;
use crate::domains::ui::state_types::LoginForm;
use crate::state::State;

pub fn view_login<'a>(
    state: &'a State,
    form: &'a LoginForm,
) -> Element<'a, DomainMessage> {
    let mut content = column![
        title("Sign in"),
        subtitle("Administer user accounts"),
        spacing(),
    ];

    // The store error wins over the local validation notice.
    if let Some(error) = state.domains.session.state.error.as_deref() {
        content = content.push(error_banner(error));
        content = content.push(Space::with_height(Length::Fixed(12.0)));
    } else if let Some(notice) = form.notice.as_deref() {
        content = content.push(error_banner(notice));
        content = content.push(Space::with_height(Length::Fixed(12.0)));
    }

    content = content.push(
        text_input("Email", &form.email)
            .on_input(|value| {
                DomainMessage::Ui(Message::LoginEmailChanged(value))
            })
            .padding(12)
            .size(16)
            .width(Length::Fill),
    );
    content = content.push(Space::with_height(Length::Fixed(8.0)));
    content = content.push(
        text_input("Password", &form.password)
            .on_input(|value| {
                DomainMessage::Ui(Message::LoginPasswordChanged(value))
            })
            .on_submit(DomainMessage::Ui(Message::LoginSubmitted))
            .secure(true)
            .padding(12)
            .size(16)
            .width(Length::Fill),
    );
    content = content.push(spacing());
    content = content.push(
        primary_button("Sign In")
            .on_press(DomainMessage::Ui(Message::LoginSubmitted)),
    );
    content = content.push(Space::with_height(Length::Fixed(12.0)));
    content = content.push(
        link_button("No account? Sign up")
            .on_press(DomainMessage::Ui(Message::GoToSignup)),
    );

    auth_container(auth_card(content.align_x(Alignment::Center))).into()
}
