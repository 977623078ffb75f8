//! Home screen: the user directory table and bulk actions.

use iced::widget::{
    Space, button, checkbox, column, container, row, scrollable, text,
};
use iced::{Alignment, Element, Length, Theme};

use super::components::{
    card, danger_button, error_banner, link_button, toolbar_button,
};
use crate::common::messages::DomainMessage;
use crate::domains::directory::messages::Message as DirectoryMessage;
use crate::domains::ui::messages::Message;
use crate::domains::ui::state_types::{HomeView, NoticeKind, Screen};
use crate::state::State;
use userdeck_model::{AccountStatus, UserRecord};

pub fn view_home(state: &State) -> Element<'_, DomainMessage> {
    let directory = &state.domains.directory.state;

    // The screen catches up with the session through events; until then
    // there is nothing to render but a placeholder.
    let Screen::Home(home) = &state.domains.ui.state.screen else {
        return container(text("Loading...").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into();
    };

    let body: Element<'_, DomainMessage> =
        if directory.is_loading && directory.users.is_empty() {
            container(text("Loading users...").size(16))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center)
                .into()
        } else if let Some(error) = directory.error.as_deref() {
            container(
                column![
                    error_banner(error),
                    Space::with_height(Length::Fixed(12.0)),
                    toolbar_button("Retry").on_press(DomainMessage::from(
                        DirectoryMessage::Refresh
                    )),
                ]
                .align_x(Alignment::Center)
                .width(Length::Fixed(480.0)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
        } else {
            view_directory(state, home)
        };

    column![view_header(state), body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header(state: &State) -> Element<'_, DomainMessage> {
    let session = &state.domains.session.state;

    let mut bar = row![text("Userdeck").size(22)]
        .spacing(16)
        .align_y(Alignment::Center)
        .padding([12.0, 20.0]);

    if let Some(user) = session.user.as_ref() {
        bar = bar.push(
            text(format!("Welcome, {}!", user.email)).size(14).style(
                |theme: &Theme| text::Style {
                    color: Some(
                        theme.extended_palette().background.strong.text,
                    ),
                },
            ),
        );
    }

    bar = bar.push(Space::with_width(Length::Fill));
    bar = bar.push(
        toolbar_button("Sign out")
            .on_press(DomainMessage::Ui(Message::SignOutPressed)),
    );

    container(bar)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        })
        .into()
}

fn view_directory<'a>(
    state: &'a State,
    home: &'a HomeView,
) -> Element<'a, DomainMessage> {
    let directory = &state.domains.directory.state;
    let rows = home.visible_rows(&directory.users);

    let mut toolbar = row![
        toolbar_button("Block")
            .on_press(DomainMessage::Ui(Message::BlockPressed)),
        toolbar_button("Unblock")
            .on_press(DomainMessage::Ui(Message::UnblockPressed)),
        danger_button("Delete")
            .on_press(DomainMessage::Ui(Message::DeletePressed)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    if directory.is_loading {
        toolbar = toolbar.push(text("Refreshing...").size(13).style(
            |theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            },
        ));
    }

    toolbar = toolbar.push(Space::with_width(Length::Fill));
    toolbar = toolbar.push(
        iced::widget::text_input("Filter by name", &home.filter)
            .on_input(|value| DomainMessage::Ui(Message::FilterChanged(value)))
            .padding(8)
            .size(14)
            .width(Length::Fixed(240.0)),
    );

    let all_selected = !rows.is_empty()
        && rows.iter().all(|user| home.selected.contains(&user.id));

    let table_header = row![
        container(
            checkbox("", all_selected)
                .on_toggle(|_| DomainMessage::Ui(Message::SelectAllToggled))
        )
        .width(Length::Fixed(36.0)),
        header_cell("Name", 3),
        button(
            text(format!("Email {}", home.sort_order.arrow()))
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(
                        theme.extended_palette().background.strong.text
                    ),
                })
        )
        .padding(0)
        .style(button::text)
        .on_press(DomainMessage::Ui(Message::ToggleEmailSort))
        .width(Length::FillPortion(4)),
        header_cell("Last seen", 3),
        header_cell("Role", 2),
        header_cell("Status", 2),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut table = column![table_header].spacing(8);
    for user in &rows {
        table = table.push(user_row(user, home.selected.contains(&user.id)));
    }
    if rows.is_empty() {
        table = table.push(
            text("No users match the current filter.").size(14).style(
                |theme: &Theme| text::Style {
                    color: Some(
                        theme.extended_palette().background.strong.text,
                    ),
                },
            ),
        );
    }

    let mut content = column![toolbar].spacing(12).padding(20);

    if let Some(notice) = home.notice.as_ref() {
        let notice_text = text(&notice.text).size(14);
        let notice_text = match notice.kind {
            NoticeKind::Error => {
                notice_text.style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                })
            }
            NoticeKind::Info => {
                notice_text.style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().success.base.color),
                })
            }
        };
        content = content.push(
            row![
                notice_text,
                Space::with_width(Length::Fill),
                link_button("Dismiss")
                    .on_press(DomainMessage::Ui(Message::DismissNotice)),
            ]
            .align_y(Alignment::Center),
        );
    }

    content = content.push(
        scrollable(card(table.padding(12)).padding(4)).height(Length::Fill),
    );

    content.width(Length::Fill).height(Length::Fill).into()
}

fn header_cell(label: &str, portion: u16) -> Element<'_, DomainMessage> {
    text(label)
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .width(Length::FillPortion(portion))
        .into()
}

fn user_row<'a>(
    user: &'a UserRecord,
    selected: bool,
) -> Element<'a, DomainMessage> {
    let id = user.id.clone();
    let last_seen = user
        .last_seen
        .map(|seen| seen.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    let status_cell = match user.status {
        AccountStatus::Blocked => {
            text("Blocked").style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
        }
        AccountStatus::Deleted => {
            text("Deleted").style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            })
        }
        AccountStatus::Active => {
            text("Active").style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().success.base.color),
            })
        }
    };

    card(
        row![
            container(checkbox("", selected).on_toggle(move |_| {
                DomainMessage::Ui(Message::RowToggled(id.clone()))
            }))
            .width(Length::Fixed(36.0)),
            text(&user.name).size(14).width(Length::FillPortion(3)),
            text(&user.email).size(14).width(Length::FillPortion(4)),
            text(last_seen).size(14).width(Length::FillPortion(3)),
            text(&user.role).size(14).width(Length::FillPortion(2)),
            status_cell.size(14).width(Length::FillPortion(2)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([8.0, 12.0])
    .into()
}
