// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored border, a severity icon,
//! a localized title, the message and a close button. The message goes into
//! a plain `Text` widget, so markup in it is shown as-is.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

/// What a toast shows, resolved from a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContent<'a> {
    pub title: String,
    pub message: &'a str,
    pub accent: Color,
    pub icon: ToastIcon,
}

/// Icon shown at the left of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIcon {
    Check,
    Info,
    Triangle,
}

impl ToastIcon {
    fn svg(self) -> Svg<'static> {
        match self {
            ToastIcon::Check => icons::check_circle(),
            ToastIcon::Info => icons::info_circle(),
            ToastIcon::Triangle => icons::triangle(),
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Resolves title, icon and accent for a notification.
    pub fn content<'a>(notification: &'a Notification, i18n: &I18n) -> ToastContent<'a> {
        let severity = notification.severity();
        ToastContent {
            title: i18n.tr(severity.title_key()),
            message: notification.message(),
            accent: severity.color(),
            icon: Self::severity_icon(severity),
        }
    }

    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let content = Self::content(notification, i18n);

        let icon = icons::tinted(
            icons::sized(content.icon.svg(), sizing::ICON_MD),
            content.accent,
        );

        let text_block = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(content.title).size(typography::BODY))
            .push(Text::new(content.message).size(typography::BODY_SM));

        let dismiss_button = button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::ghost);

        // Layout: [icon] [title/message] [dismiss]
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(Container::new(text_block).width(Length::Fill))
            .push(dismiss_button);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(content.accent))
            .into()
    }

    /// Renders the toast overlay with all visible notifications, stacked
    /// at the top center of the window in arrival order.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        if manager.visible_count() == 0 {
            return None;
        }

        let toasts = Column::with_children(
            manager
                .visible()
                .map(|notification| Self::view(notification, i18n)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

        Some(
            Container::new(toasts)
                .width(Length::Fill)
                .height(Length::Shrink)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::MD)
                .into(),
        )
    }

    /// Returns the icon for the severity level.
    fn severity_icon(severity: Severity) -> ToastIcon {
        match severity {
            Severity::Success => ToastIcon::Check,
            Severity::Info | Severity::Error => ToastIcon::Info,
            Severity::Warning => ToastIcon::Triangle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    #[test]
    fn markup_in_message_stays_literal() {
        let i18n = english();
        let raw = "<script>alert(1)</script><b>bold</b>";
        let notification = Notification::error(raw);

        let content = Toast::content(&notification, &i18n);
        assert_eq!(content.message, raw);
    }

    #[test]
    fn unknown_severity_uses_info_title_and_icon() {
        let i18n = english();
        let notification = Notification::new(Severity::from_name("nonsense"), "hi");

        let content = Toast::content(&notification, &i18n);
        assert_eq!(content.title, "Info");
        assert_eq!(content.icon, ToastIcon::Info);
        assert_eq!(content.accent, Severity::Info.color());
    }

    #[test]
    fn titles_follow_severity() {
        let i18n = english();
        let titles: Vec<_> = ["success", "error", "danger", "warning", "info"]
            .into_iter()
            .map(|name| Toast::content(&Notification::new(Severity::from_name(name), ""), &i18n).title)
            .collect();
        assert_eq!(titles, vec!["Success", "Error", "Error", "Warning", "Info"]);
    }

    #[test]
    fn warning_uses_triangle() {
        assert_eq!(Toast::severity_icon(Severity::Warning), ToastIcon::Triangle);
        assert_eq!(Toast::severity_icon(Severity::Success), ToastIcon::Check);
    }

    #[test]
    fn empty_manager_renders_no_overlay() {
        let i18n = english();
        let manager = Manager::new();
        assert!(Toast::view_overlay(&manager, &i18n).is_none());
    }
}
