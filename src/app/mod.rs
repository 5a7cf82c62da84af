// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the menu, the notification manager, and the
//! diagnostics collector together and translates messages into side effects
//! like config persistence or worker registration. Policy decisions (window
//! size, when config is saved, when the worker is registered) live here so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::{DiagnosticsCollector, ErrorEvent, ErrorType};
use crate::ui::menu;
use crate::ui::notifications::{self, DisplayRegion};
use crate::ui::theming::ThemeMode;
use iced::widget::Id;
use iced::{window, Element, Point, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Scrollable id of the content region toasts are inserted into.
const CONTENT_REGION: &str = "content-region";

/// Root Iced application state.
pub struct App {
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Last known cursor position, for outside-click detection.
    cursor: Point,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// In-memory diagnostics; flushed to disk by the background worker.
    diagnostics: DiagnosticsCollector,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsCollector::new();
        let mut notifications = notifications::Manager::with_region(DisplayRegion::new(
            Id::new(CONTENT_REGION),
        ));
        notifications.set_diagnostics(diagnostics.handle());
        Self {
            theme_mode: ThemeMode::System,
            menu_open: false,
            cursor: Point::ORIGIN,
            notifications,
            diagnostics,
        }
    }
}

impl App {
    /// Initializes application state from config and flags and kicks off the
    /// background worker registration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();

        let mut app = App::default();
        app.theme_mode = config.theme_mode();

        // CLI theme override wins over the config file.
        if let Some(keyword) = flags.theme.as_deref() {
            app.theme_mode = ThemeMode::from_keyword(keyword);
        }

        if let Some(warning) = config_warning {
            app.diagnostics
                .handle()
                .log_error(ErrorEvent::new(ErrorType::Config, warning.clone()));
            app.notifications.push(notifications::Notification::new(
                notifications::Severity::Error,
                warning,
            ));
        }

        let task = if config.worker_enabled() && crate::worker::supports_workers() {
            match paths::get_app_data_dir() {
                Some(data_dir) => Task::perform(
                    crate::worker::register(data_dir, app.diagnostics.clone()),
                    Message::WorkerRegistered,
                ),
                None => {
                    app.diagnostics
                        .handle()
                        .log_warning_simple("No data directory; worker not registered");
                    Task::none()
                }
            }
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        "Herald".to_string()
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let handle = self.diagnostics.handle();
        let mut ctx = update::UpdateContext {
            menu_open: &mut self.menu_open,
            theme_mode: &mut self.theme_mode,
            cursor: &mut self.cursor,
            notifications: &mut self.notifications,
            diagnostics: &handle,
        };

        match message {
            Message::Menu(menu_message) => {
                let event = menu::update(menu_message, ctx.menu_open);
                let persist_theme = matches!(event, menu::Event::ToggleTheme);
                let task = update::handle_menu_event(&mut ctx, event);
                if persist_theme {
                    self.persist_theme_mode();
                }
                task
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::ShowToast { severity, message } => {
                update::handle_show_toast(&mut ctx, severity, message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::CursorMoved(position) => update::handle_cursor_moved(&mut ctx, position),
            Message::MousePressed => update::handle_mouse_pressed(&mut ctx),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::WorkerRegistered(result) => {
                update::handle_worker_registered(&mut ctx, &result)
            }
        }
    }

    /// Writes the current theme mode back to `settings.toml`. A failed save
    /// is reported to diagnostics and does not interrupt the session.
    fn persist_theme_mode(&mut self) {
        let (mut config, _warning) = config::load();
        config.general.theme_mode = self.theme_mode;
        if let Err(err) = config::save(&config) {
            self.diagnostics
                .handle()
                .log_warning_simple(format!("Could not save settings: {err}"));
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}
