// SPDX-License-Identifier: MPL-2.0
//! User menu module for app-level actions.
//!
//! The menu hangs off a toggle button in the top bar. It closes when an
//! entry is picked, when the user clicks anywhere outside the dropdown and
//! its toggle, or when Escape is pressed; the outside-click and Escape
//! triggers are routed from raw events by the app layer, which uses the
//! hit-testing helpers below.

use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Element, Length, Point, Theme,
};

/// Number of entries in the dropdown. Keep in sync with `build_dropdown`.
const ENTRY_COUNT: usize = 3;

/// Contextual data needed to render the menu bar.
pub struct ViewContext {
    pub menu_open: bool,
}

/// Messages emitted by the menu.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    ToggleTheme,
    ClearNotifications,
    ShowAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleTheme,
    ClearNotifications,
    ShowAbout,
}

/// Process a menu message and return the corresponding event.
/// Picking any entry closes the menu.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::ToggleTheme => {
            *menu_open = false;
            Event::ToggleTheme
        }
        Message::ClearNotifications => {
            *menu_open = false;
            Event::ClearNotifications
        }
        Message::ShowAbout => {
            *menu_open = false;
            Event::ShowAbout
        }
    }
}

/// Returns whether the cursor is over the menu toggle button.
///
/// A press on the toggle must not count as an outside click, otherwise the
/// toggle would close and immediately reopen the menu.
#[must_use]
pub fn is_on_toggle(cursor: Point) -> bool {
    cursor.x >= 0.0
        && cursor.x < sizing::MENU_TOGGLE_WIDTH
        && cursor.y >= 0.0
        && cursor.y < sizing::TOP_BAR_HEIGHT
}

/// Returns whether the cursor is inside the open dropdown.
///
/// The rectangle is derived from the sizing tokens the view is built with;
/// there is no per-widget hit-testing in the raw event stream.
#[must_use]
pub fn is_inside_menu(cursor: Point) -> bool {
    let top = sizing::TOP_BAR_HEIGHT;
    let bottom = top + ENTRY_COUNT as f32 * sizing::MENU_ITEM_HEIGHT;
    cursor.x >= 0.0 && cursor.x < sizing::MENU_WIDTH && cursor.y >= top && cursor.y < bottom
}

/// Render the top bar and, when open, the dropdown below it.
pub fn view(ctx: &ViewContext) -> Element<'static, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar());

    if ctx.menu_open {
        content = content.push(build_dropdown());
    }

    content.into()
}

/// Build the top bar with the menu toggle button and the app title.
fn build_top_bar() -> Element<'static, Message> {
    let toggle_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .width(Length::Fixed(sizing::MENU_TOGGLE_WIDTH))
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .padding(spacing::SM);

    let title = Text::new("Herald").size(typography::TITLE_MD);

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .spacing(spacing::SM)
            .push(toggle_button)
            .push(title),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
    .style(top_bar_style)
    .into()
}

/// Build the dropdown with the menu entries.
fn build_dropdown() -> Element<'static, Message> {
    let entry = |label: &'static str, message: Message| {
        button(
            Text::new(label)
                .size(typography::BODY)
                .align_y(Vertical::Center),
        )
        .on_press(message)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .height(Length::Fixed(sizing::MENU_ITEM_HEIGHT))
        .padding(spacing::XS)
        .style(button::text)
    };

    let entries = Column::new()
        .push(entry("Toggle theme", Message::ToggleTheme))
        .push(entry("Clear notifications", Message::ClearNotifications))
        .push(entry("About", Message::ShowAbout));

    Container::new(entries)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .style(dropdown_style)
        .into()
}

fn top_bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}

fn dropdown_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        border: iced::Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(open);
        update(Message::ToggleMenu, &mut open);
        assert!(!open);
    }

    #[test]
    fn close_is_idempotent() {
        let mut open = false;
        assert_eq!(update(Message::CloseMenu, &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn entries_close_the_menu_and_propagate() {
        let mut open = true;
        assert_eq!(update(Message::ToggleTheme, &mut open), Event::ToggleTheme);
        assert!(!open);

        open = true;
        assert_eq!(
            update(Message::ClearNotifications, &mut open),
            Event::ClearNotifications
        );
        assert!(!open);

        open = true;
        assert_eq!(update(Message::ShowAbout, &mut open), Event::ShowAbout);
        assert!(!open);
    }

    #[test]
    fn toggle_hit_test_matches_button_rect() {
        assert!(is_on_toggle(Point::new(1.0, 1.0)));
        assert!(is_on_toggle(Point::new(
            sizing::MENU_TOGGLE_WIDTH - 1.0,
            sizing::TOP_BAR_HEIGHT - 1.0
        )));
        assert!(!is_on_toggle(Point::new(sizing::MENU_TOGGLE_WIDTH, 1.0)));
        assert!(!is_on_toggle(Point::new(1.0, sizing::TOP_BAR_HEIGHT)));
    }

    #[test]
    fn dropdown_hit_test_matches_dropdown_rect() {
        let inside = Point::new(10.0, sizing::TOP_BAR_HEIGHT + 10.0);
        assert!(is_inside_menu(inside));

        // The top bar itself is not part of the dropdown
        assert!(!is_inside_menu(Point::new(10.0, 10.0)));

        // Right of the dropdown
        assert!(!is_inside_menu(Point::new(
            sizing::MENU_WIDTH + 1.0,
            sizing::TOP_BAR_HEIGHT + 10.0
        )));

        // Below the last entry
        let below = sizing::TOP_BAR_HEIGHT + 3.0 * sizing::MENU_ITEM_HEIGHT + 1.0;
        assert!(!is_inside_menu(Point::new(10.0, below)));
    }
}
