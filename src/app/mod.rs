// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the entry screens, the
//! delete dialog and the toast notifications.
//!
//! The `App` struct owns every component (there is no global state) and
//! translates their events into side effects such as adding or deleting
//! entries and showing toasts whose auto-dismiss tasks are handed back to
//! the runtime.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::journal::{Journal, Quote};
use crate::ui::delete_confirmation;
use crate::ui::entry_form;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use chrono::Local;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    journal: Journal,
    delete_dialog: delete_confirmation::State,
    entry_form: entry_form::State,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Settings as loaded, updated when a preference changes.
    config: Config,
    /// Settings directory override, where preference changes are saved.
    config_dir: Option<PathBuf>,
    quote: &'static Quote,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("entries", &self.journal.len())
            .field("dialog", &self.delete_dialog.phase())
            .field("visible_toasts", &self.notifications.visible_count())
            .field("pending_toasts", &self.notifications.pending_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
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

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
        Self::from_config(None, Config::default(), None)
    }
}

impl App {
    /// Builds the application state from resolved preferences.
    fn from_config(lang: Option<String>, config: Config, config_dir: Option<PathBuf>) -> Self {
        let i18n = I18n::new(lang, &config);
        let delete_dialog =
            delete_confirmation::State::new(i18n.tr("delete-dialog-fallback-label"));
        let notifications = notifications::Manager::with_limits(
            config.notifications.max_visible(),
            config.notifications.duration(),
            config.notifications.error_duration(),
        );

        Self {
            i18n,
            screen: Screen::default(),
            journal: Journal::with_sample_entries(),
            delete_dialog,
            entry_form: entry_form::State::new(),
            theme_mode: config.general.theme_mode,
            notifications,
            config,
            config_dir,
            quote: Quote::for_date(Local::now().date_naive()),
        }
    }

    /// Initializes application state from the launcher flags. Problems with
    /// the settings file are reported as a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let mut app = Self::from_config(flags.lang, config, flags.config_dir);

        log::info!(
            "Starting with locale {} and {} entries",
            app.i18n.current_locale(),
            app.journal.len()
        );

        let task = match config_warning {
            Some(key) => {
                let message = app.i18n.tr(&key);
                update::schedule_dismiss(app.notifications.warning(message, None))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(
            self.delete_dialog.is_open() || self.screen == Screen::NewEntry,
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            journal: &mut self.journal,
            delete_dialog: &mut self.delete_dialog,
            entry_form: &mut self.entry_form,
            notifications: &mut self.notifications,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: &self.config_dir,
        };

        match message {
            Message::Entries(entries_message) => {
                update::handle_entries_message(&mut ctx, entries_message)
            }
            Message::DeleteDialog(dialog_message) => {
                update::handle_delete_dialog_message(&mut ctx, dialog_message)
            }
            Message::EntryForm(form_message) => {
                update::handle_entry_form_message(&mut ctx, form_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::DeleteSubmitted(action) => update::handle_delete_submitted(&mut ctx, &action),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            journal: &self.journal,
            entry_form: &self.entry_form,
            theme_mode: self.theme_mode,
            quote: self.quote,
            delete_dialog: &self.delete_dialog,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{route, Mood};
    use crate::ui::entries;
    use tempfile::tempdir;

    fn english_app() -> App {
        App::from_config(Some("en-US".into()), Config::default(), None)
    }

    fn entry_id(app: &App, title: &str) -> u64 {
        app.journal
            .entries()
            .find(|entry| entry.title == title)
            .map(|entry| entry.id)
            .unwrap()
    }

    fn press_delete(app: &mut App, id: u64) {
        let entry = app.journal.get(id).unwrap();
        let trigger = entries::delete_trigger(entry);
        let _ = app.update(Message::Entries(entries::Message::DeletePressed(trigger)));
    }

    #[test]
    fn delete_flow_removes_entry_and_shows_success_toast() {
        let mut app = english_app();
        let id = entry_id(&app, "Day One");
        let before = app.journal.len();

        press_delete(&mut app, id);
        assert!(app.delete_dialog.is_open());
        assert_eq!(app.delete_dialog.label(), "Day One");
        assert_eq!(
            app.delete_dialog.form_action(),
            Some(route::delete_entry(id).as_str())
        );

        let _ = app.update(Message::DeleteDialog(delete_confirmation::Message::Confirm));
        assert!(app.delete_dialog.is_submitting());
        assert_eq!(app.journal.len(), before);

        let _ = app.update(Message::DeleteSubmitted(route::delete_entry(id)));
        assert!(!app.delete_dialog.is_open());
        assert_eq!(app.journal.len(), before - 1);

        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), notifications::Severity::Success);
        assert_eq!(toast.message(), "Entry \"Day One\" deleted.");
    }

    #[test]
    fn untitled_entry_uses_fallback_label() {
        let mut app = english_app();
        let id = entry_id(&app, "");

        press_delete(&mut app, id);
        assert_eq!(app.delete_dialog.label(), "this entry");

        let _ = app.update(Message::DeleteSubmitted(route::delete_entry(id)));
        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.message(), "Entry \"this entry\" deleted.");
    }

    #[test]
    fn deleting_a_missing_entry_shows_error_toast() {
        let mut app = english_app();
        let before = app.journal.len();

        let _ = app.update(Message::DeleteSubmitted(route::delete_entry(999)));
        assert_eq!(app.journal.len(), before);

        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), notifications::Severity::Error);
        assert_eq!(toast.message(), "That entry no longer exists.");
    }

    #[test]
    fn escape_cancels_open_dialog() {
        let mut app = english_app();
        let id = entry_id(&app, "Rainy walk");

        press_delete(&mut app, id);
        let _ = app.update(Message::EscapePressed);
        assert!(!app.delete_dialog.is_open());
        assert!(app.journal.get(id).is_some());
    }

    #[test]
    fn clear_notifications_empties_the_queue() {
        let mut app = english_app();
        let timers: Vec<_> = (0..8)
            .filter_map(|i| app.notifications.info(format!("toast {i}"), None))
            .collect();
        assert_eq!(timers.len(), 5);
        assert_eq!(app.notifications.visible_count(), 5);
        assert_eq!(app.notifications.pending_count(), 3);
        assert!(timers.iter().all(|timer| !timer.is_cancelled()));

        let _ = app.update(Message::Entries(entries::Message::ClearNotifications));
        assert_eq!(app.notifications.visible_count(), 0);
        assert_eq!(app.notifications.pending_count(), 0);
        assert!(timers.iter().all(|timer| timer.is_cancelled()));
    }

    #[test]
    fn closing_a_toast_promotes_the_next_one() {
        let mut app = english_app();
        for i in 0..6 {
            let _ = app.notifications.info(format!("toast {i}"), None);
        }
        let first = app.notifications.visible().next().unwrap().id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(first),
        ));

        let messages: Vec<_> = app.notifications.visible().map(|n| n.message()).collect();
        assert_eq!(messages, vec!["toast 1", "toast 2", "toast 3", "toast 4", "toast 5"]);
        assert_eq!(app.notifications.pending_count(), 0);
    }

    #[test]
    fn configured_cap_is_applied() {
        let mut config = Config::default();
        config.notifications.max_visible = Some(2);
        let mut app = App::from_config(Some("en-US".into()), config, None);

        for i in 0..4 {
            let _ = app.notifications.warning(format!("toast {i}"), None);
        }
        assert_eq!(app.notifications.visible_count(), 2);
        assert_eq!(app.notifications.pending_count(), 2);
    }

    #[test]
    fn french_locale_localizes_fallback_label() {
        let mut app = App::from_config(Some("fr".into()), Config::default(), None);
        let id = entry_id(&app, "");

        press_delete(&mut app, id);
        assert_eq!(app.delete_dialog.label(), "cette entrée");
    }

    fn fill_form(app: &mut App) {
        let messages = [
            entry_form::Message::DateChanged("2026-05-02 08:30".into()),
            entry_form::Message::MoodSelected(Mood::Calm),
            entry_form::Message::RatingSelected(4),
            entry_form::Message::TitleChanged("Morning run".into()),
            entry_form::Message::ContentChanged("Five kilometres by the river.".into()),
            entry_form::Message::GratitudeChanged(0, "Fresh air".into()),
            entry_form::Message::GratitudeChanged(2, "  ".into()),
        ];
        for message in messages {
            let _ = app.update(Message::EntryForm(message));
        }
    }

    #[test]
    fn saving_the_form_adds_entry_and_shows_success_toast() {
        let mut app = english_app();
        let before = app.journal.len();

        let _ = app.update(Message::Entries(entries::Message::NewEntryPressed));
        assert_eq!(app.screen, Screen::NewEntry);

        fill_form(&mut app);
        let _ = app.update(Message::EntryForm(entry_form::Message::Save));

        assert_eq!(app.screen, Screen::Entries);
        assert_eq!(app.journal.len(), before + 1);
        let id = entry_id(&app, "Morning run");
        let entry = app.journal.get(id).unwrap();
        assert_eq!(entry.mood, Mood::Calm);
        assert_eq!(entry.mood_rating.value(), 4);
        assert_eq!(entry.gratitude_items, vec!["Fresh air"]);

        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), notifications::Severity::Success);
        assert_eq!(toast.message(), "Entry \"Morning run\" saved.");
        assert!(app.entry_form.title().is_empty());
    }

    #[test]
    fn invalid_form_stays_open_without_toast() {
        let mut app = english_app();
        let before = app.journal.len();

        let _ = app.update(Message::Entries(entries::Message::NewEntryPressed));
        let _ = app.update(Message::EntryForm(entry_form::Message::Save));

        assert_eq!(app.screen, Screen::NewEntry);
        assert_eq!(app.journal.len(), before);
        assert!(!app.entry_form.errors().is_empty());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn escape_leaves_the_form() {
        let mut app = english_app();
        let _ = app.update(Message::Entries(entries::Message::NewEntryPressed));
        fill_form(&mut app);

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen, Screen::Entries);
        assert!(app.entry_form.title().is_empty());
    }

    #[test]
    fn cycling_theme_saves_preference() {
        let dir = tempdir().unwrap();
        let mut app = App::from_config(
            Some("en-US".into()),
            Config::default(),
            Some(dir.path().to_path_buf()),
        );
        assert_eq!(app.theme_mode, ThemeMode::System);

        let _ = app.update(Message::Entries(entries::Message::CycleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.theme_mode, ThemeMode::Light);
        assert!(!app.notifications.has_notifications());
    }
}
