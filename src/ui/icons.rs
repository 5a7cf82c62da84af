// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. SVG sources live in `assets/icons/svg/` and use
//! stroke-based line art so they can be tinted per theme at render time.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static, Theme> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/svg/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(check_circle, "check-circle.svg", "Checkmark inside a circle.");
define_icon!(
    exclamation_triangle,
    "exclamation-triangle.svg",
    "Exclamation mark inside a triangle."
);
define_icon!(info_circle, "info-circle.svg", "Letter i inside a circle.");
define_icon!(cross, "cross.svg", "Diagonal cross.");
define_icon!(menu, "menu.svg", "Three horizontal bars (hamburger).");

/// Sizes an icon to a square of `px` logical pixels.
pub fn sized(icon: Svg<'static, Theme>, px: f32) -> Svg<'static, Theme> {
    icon.width(Length::Fixed(px)).height(Length::Fixed(px))
}
