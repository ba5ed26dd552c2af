// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icons.
//!
//! Icons are embedded as SVG sources and handles are cached using `OnceLock`.
//! They are drawn in black and tinted at render time through
//! [`tinted`], so one source serves every theme and severity.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const CHECK_CIRCLE: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <circle cx="12" cy="12" r="10" fill="black" opacity="0.08"/>
  <path d="M8 12L11 15L16 9" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
</svg>"#;

const INFO_CIRCLE: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <circle cx="12" cy="12" r="10" fill="black" opacity="0.08"/>
  <path d="M12 8V12M12 16H12.01" stroke="black" stroke-width="2" stroke-linecap="round"/>
</svg>"#;

const TRIANGLE: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M12 2L2 20H22L12 2Z" fill="black" opacity="0.08"/>
  <path d="M12 3L3 19H21L12 3Z" stroke="black" stroke-width="2" stroke-linejoin="round"/>
  <path d="M12 9V13" stroke="black" stroke-width="2" stroke-linecap="round"/>
  <circle cx="12" cy="17" r="1" fill="black"/>
</svg>"#;

const CROSS: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M6 6L18 18M18 6L6 18" stroke="black" stroke-width="2" stroke-linecap="round"/>
</svg>"#;

const TRASH: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M4 7H20M10 11V17M14 11V17M6 7L7 20H17L18 7M9 7V4H15V7" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
</svg>"#;

define_icon!(check_circle, CHECK_CIRCLE, "Circled check mark (success).");
define_icon!(info_circle, INFO_CIRCLE, "Circled exclamation (info and error).");
define_icon!(triangle, TRIANGLE, "Warning triangle.");
define_icon!(cross, CROSS, "Close cross.");
define_icon!(trash, TRASH, "Trash can.");

/// Sizes an icon to a square of `size` pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Tints an icon with the theme's text color.
pub fn themed<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}
