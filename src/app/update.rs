// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler that can make a toast visible turns the returned
//! [`ScheduledDismiss`] into a task, so auto-dismissal is always driven by
//! the runtime and cancelled through the manager.

use super::config::{self, Config};
use super::screen::Screen;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::journal::Journal;
use crate::ui::delete_confirmation::{self, Event as DeleteDialogEvent};
use crate::ui::entries::{self, Event as EntriesEvent};
use crate::ui::entry_form::{self, Event as EntryFormEvent};
use crate::ui::notifications::{self, ScheduledDismiss};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub journal: &'a mut Journal,
    pub delete_dialog: &'a mut delete_confirmation::State,
    pub entry_form: &'a mut entry_form::State,
    pub notifications: &'a mut notifications::Manager,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
}

/// Wraps the auto-dismiss task of a newly visible toast, if any.
pub fn schedule_dismiss(scheduled: Option<ScheduledDismiss>) -> Task<Message> {
    scheduled.map_or_else(Task::none, |scheduled| {
        scheduled.into_task().map(Message::Notification)
    })
}

pub fn handle_entries_message(ctx: &mut UpdateContext<'_>, message: entries::Message) -> Task<Message> {
    match entries::update(message) {
        EntriesEvent::None => Task::none(),
        EntriesEvent::OpenDeleteDialog(trigger) => {
            ctx.delete_dialog.open(trigger);
            Task::none()
        }
        EntriesEvent::ClearNotifications => {
            ctx.notifications.clear_all();
            Task::none()
        }
        EntriesEvent::OpenNewEntry => {
            *ctx.screen = Screen::NewEntry;
            Task::none()
        }
        EntriesEvent::CycleTheme => handle_cycle_theme(ctx),
    }
}

/// Switches to the next theme mode and persists it.
fn handle_cycle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.next();
    ctx.config.general.theme_mode = *ctx.theme_mode;

    match config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        Ok(()) => Task::none(),
        Err(err) => {
            log::warn!("Failed to save theme preference: {err}");
            let message = ctx.i18n.tr("notification-config-save-error");
            schedule_dismiss(ctx.notifications.error(message, None))
        }
    }
}

pub fn handle_entry_form_message(
    ctx: &mut UpdateContext<'_>,
    message: entry_form::Message,
) -> Task<Message> {
    match entry_form::update(ctx.entry_form, message) {
        EntryFormEvent::None => Task::none(),
        EntryFormEvent::Cancelled => {
            *ctx.screen = Screen::Entries;
            Task::none()
        }
        EntryFormEvent::Saved(entry) => {
            let title = entry.title.clone();
            let id = ctx.journal.add(entry);
            log::info!("Created entry {id}");

            *ctx.screen = Screen::Entries;
            let message = ctx
                .i18n
                .tr_with_args("notification-entry-created", &[("title", title.as_str())]);
            schedule_dismiss(ctx.notifications.success(message, None))
        }
    }
}

pub fn handle_delete_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: delete_confirmation::Message,
) -> Task<Message> {
    match delete_confirmation::update(ctx.delete_dialog, message) {
        DeleteDialogEvent::None => Task::none(),
        // Delivered on the next update so the pending state is rendered first.
        DeleteDialogEvent::Submit { action } => Task::done(Message::DeleteSubmitted(action)),
    }
}

/// Delivers a delete submission to the journal and reports the outcome.
pub fn handle_delete_submitted(ctx: &mut UpdateContext<'_>, action: &str) -> Task<Message> {
    let scheduled = match ctx.journal.delete_at(action) {
        Ok(entry) => {
            let title = if entry.title.trim().is_empty() {
                ctx.delete_dialog.label().to_string()
            } else {
                entry.title
            };
            let message = ctx
                .i18n
                .tr_with_args("notification-entry-deleted", &[("title", title.as_str())]);
            ctx.notifications.success(message, None)
        }
        Err(err) => {
            log::warn!("Delete submission to {action} failed: {err}");
            ctx.notifications.error(ctx.i18n.tr(err.i18n_key()), None)
        }
    };

    ctx.delete_dialog.finish();
    schedule_dismiss(scheduled)
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    schedule_dismiss(ctx.notifications.handle_message(message))
}

/// Escape cancels the dialog when it is open, otherwise the new entry form.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.delete_dialog.is_open() {
        handle_delete_dialog_message(ctx, delete_confirmation::Message::Cancel)
    } else if *ctx.screen == Screen::NewEntry {
        handle_entry_form_message(ctx, entry_form::Message::Cancel)
    } else {
        Task::none()
    }
}
