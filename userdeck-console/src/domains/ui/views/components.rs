//! Shared widget helpers for the console views.

use iced::{
    Element, Length, Theme,
    widget::{Button, Container, Space, button, container, text},
};

use crate::common::messages::DomainMessage;

/// Full-window container that centers its content.
pub fn auth_container<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(20)
}

/// Card surface used by the sign-in and sign-up forms.
pub fn auth_card<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(content)
        .width(Length::Fixed(400.0))
        .padding(30)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            }
        })
}

/// Card surface used for table rows and panels.
pub fn card<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(content)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: iced::Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
}

/// Creates a full-width primary button with consistent styling.
pub fn primary_button<'a>(label: &'a str) -> Button<'a, DomainMessage> {
    button(
        text(label)
            .size(16)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([12.0, 24.0])
    .style(|theme: &Theme, status| {
        let palette = theme.extended_palette();
        match status {
            button::Status::Active => button::Style {
                background: Some(palette.primary.base.color.into()),
                text_color: palette.primary.base.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Hovered => button::Style {
                background: Some(palette.primary.strong.color.into()),
                text_color: palette.primary.strong.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Pressed => button::Style {
                background: Some(palette.primary.weak.color.into()),
                text_color: palette.primary.weak.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Disabled => button::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: palette.background.strong.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    })
}

/// Creates a compact outline button for the toolbar.
pub fn toolbar_button<'a>(label: &'a str) -> Button<'a, DomainMessage> {
    button(text(label).size(14))
        .padding([6.0, 14.0])
        .style(|theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(palette.primary.weak.color.into())
                }
                _ => None,
            };
            button::Style {
                background,
                text_color: palette.primary.base.color,
                border: iced::Border {
                    color: palette.primary.base.color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
}

/// Creates a compact outline button for destructive actions.
pub fn danger_button<'a>(label: &'a str) -> Button<'a, DomainMessage> {
    button(text(label).size(14))
        .padding([6.0, 14.0])
        .style(|theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(palette.danger.weak.color.into())
                }
                _ => None,
            };
            button::Style {
                background,
                text_color: palette.danger.base.color,
                border: iced::Border {
                    color: palette.danger.base.color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
}

/// Creates a borderless text button for cross-links.
pub fn link_button<'a>(label: &'a str) -> Button<'a, DomainMessage> {
    button(text(label).size(14)).padding(0).style(button::text)
}

/// Creates an error message banner.
pub fn error_banner<'a>(error: &'a str) -> Container<'a, DomainMessage> {
    container(text(error).size(14).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }))
    .width(Length::Fill)
    .padding([8.0, 12.0])
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.danger.weak.color.into()),
            border: iced::Border {
                color: palette.danger.base.color,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    })
}

/// Creates a title text element.
pub fn title<'a>(text_content: &'a str) -> Element<'a, DomainMessage> {
    text(text_content)
        .size(28)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

/// Creates a subtitle text element.
pub fn subtitle<'a>(text_content: &'a str) -> Element<'a, DomainMessage> {
    text(text_content)
        .size(16)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

/// Creates consistent vertical spacing.
pub fn spacing() -> Space {
    Space::with_height(Length::Fixed(20.0))
}
