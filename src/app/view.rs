// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The layout is a top bar with the user menu, and below it the scrollable
//! content region. The toast banner occupies the first slot of the region
//! so a fresh notification is the topmost element after the scroll-to-top.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::menu;
use crate::ui::notifications::{self, Severity, Toast};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub menu_open: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu_bar = menu::view(&menu::ViewContext {
        menu_open: ctx.menu_open,
    })
    .map(Message::Menu);

    let banner = Toast::view_banner(ctx.notifications).map(Message::Notification);

    let region_content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(banner)
        .push(view_content());

    let mut region = scrollable(region_content).width(Length::Fill).height(Length::Fill);
    if let Some(display_region) = ctx.notifications.region() {
        region = region.id(display_region.scrollable_id());
    }

    Column::new()
        .push(menu_bar)
        .push(region)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The demo content: trigger buttons for each severity.
fn view_content() -> Element<'static, Message> {
    let trigger = |label: &'static str, severity: Severity, message: &str| {
        button(Text::new(label).size(typography::BODY)).on_press(Message::ShowToast {
            severity,
            message: message.to_string(),
        })
    };

    let triggers = Row::new()
        .spacing(spacing::SM)
        .push(trigger("Info", Severity::Info, "Something happened"))
        .push(trigger("Success", Severity::Success, "Saved successfully"))
        .push(trigger("Error", Severity::Error, "Something went wrong"));

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Notifications").size(typography::TITLE_MD))
            .push(
                Text::new(
                    "Trigger a toast below. A new toast replaces the current \
                     one and disappears on its own after five seconds, or \
                     sooner via its close button.",
                )
                .size(typography::BODY),
            )
            .push(triggers),
    )
    .width(Length::Fill)
    .into()
}
