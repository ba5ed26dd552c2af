// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimmed full-window backdrop behind the delete dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}
