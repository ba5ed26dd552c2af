// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The current screen is the base layer. The delete dialog and the toast
//! overlay are stacked above it when present.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::journal::{Journal, Quote};
use crate::ui::delete_confirmation::{self, ViewContext as DeleteDialogViewContext};
use crate::ui::entries::{self, ViewContext as EntriesViewContext};
use crate::ui::entry_form::{self, ViewContext as EntryFormViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub journal: &'a Journal,
    pub entry_form: &'a entry_form::State,
    pub theme_mode: ThemeMode,
    pub quote: &'a Quote,
    pub delete_dialog: &'a delete_confirmation::State,
    pub notifications: &'a Manager,
}

/// Renders the current screen with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = match ctx.screen {
        Screen::Entries => entries::view(EntriesViewContext {
            i18n: ctx.i18n,
            journal: ctx.journal,
            has_notifications: ctx.notifications.has_notifications(),
            theme_mode: ctx.theme_mode,
            quote: ctx.quote,
        })
        .map(Message::Entries),
        Screen::NewEntry => entry_form::view(EntryFormViewContext {
            i18n: ctx.i18n,
            state: ctx.entry_form,
        })
        .map(Message::EntryForm),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(dialog) = delete_confirmation::view(DeleteDialogViewContext {
        i18n: ctx.i18n,
        state: ctx.delete_dialog,
    }) {
        layers = layers.push(dialog.map(Message::DeleteDialog));
    }

    // Toasts stay above the dialog so a failed delete is visible
    if let Some(toasts) = Toast::view_overlay(ctx.notifications, ctx.i18n) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    layers.into()
}
