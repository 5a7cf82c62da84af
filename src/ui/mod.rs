// SPDX-License-Identifier: MPL-2.0
//! UI components: design tokens, icons, the user menu, and the toast
//! notification system.

pub mod design_tokens;
pub mod icons;
pub mod menu;
pub mod notifications;
pub mod theming;
