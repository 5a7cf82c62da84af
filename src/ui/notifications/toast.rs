// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the shown notification.
//!
//! The toast renders as an inline alert banner at the top of the content
//! region: a severity icon, the message text, and a close button inside a
//! container with a severity-colored accent border. During the exit phase
//! the banner fades out.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase, Severity};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, svg, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let alpha = match notification.phase() {
            Phase::Exiting { .. } => opacity::EXITING,
            _ => opacity::OPAQUE,
        };

        let icon_widget = icons::sized(Self::severity_icon(severity), sizing::ICON_MD).style(
            move |_theme: &Theme, _status| svg::Style {
                color: Some(Color {
                    a: alpha,
                    ..accent_color
                }),
            },
        );

        // Message content is plain text; it is never interpreted as markup.
        let message_widget = Text::new(notification.message().to_owned())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let notification_id = notification.id();
        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the banner slot at the top of the content region.
    ///
    /// The newest notification is always the only one, so the slot holds
    /// either one banner or nothing.
    pub fn view_banner(manager: &Manager) -> Element<'_, Message> {
        match manager.current() {
            Some(notification) => Self::view(notification),
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }

    /// Returns the appropriate icon for the severity level.
    fn severity_icon(severity: Severity) -> Svg<'static, Theme> {
        match severity {
            Severity::Success => icons::check_circle(),
            Severity::Error => icons::exclamation_triangle(),
            Severity::Info => icons::info_circle(),
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..bg_color })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
