// SPDX-License-Identifier: MPL-2.0
use mood_journal::config::{self, Config};
use mood_journal::i18n::fluent::I18n;
use mood_journal::journal::{route, Journal, Mood};
use mood_journal::ui::delete_confirmation::{self, DeleteTrigger, Event};
use mood_journal::ui::entries;
use mood_journal::ui::entry_form;
use mood_journal::ui::notifications::{
    Manager, NotificationMessage, ScheduledDismiss, Severity, Toast,
};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn visible_toasts_never_exceed_cap() {
    let mut manager = Manager::new();

    for i in 0..20 {
        let _ = manager.show_named(format!("toast {i}"), "success", None);
        assert!(manager.visible_count() <= 5);
    }
    assert_eq!(manager.visible_count(), 5);
    assert_eq!(manager.pending_count(), 15);
}

#[test]
fn pending_toasts_are_shown_in_arrival_order() {
    let mut manager = Manager::new();
    for i in 0..9 {
        let _ = manager.info(format!("toast {i}"), None);
    }

    let mut shown = Vec::new();
    while let Some(first) = {
        let id = manager.visible().next().map(|n| n.id());
        id
    } {
        shown.push(
            manager
                .visible()
                .next()
                .map(|n| n.message().to_string())
                .unwrap(),
        );
        let _ = manager.dismiss(first);
    }

    let expected: Vec<_> = (0..9).map(|i| format!("toast {i}")).collect();
    assert_eq!(shown, expected);
}

#[test]
fn clear_all_discards_everything_and_cancels_timers() {
    let mut manager = Manager::new();
    let scheduled: Vec<ScheduledDismiss> = (0..7)
        .filter_map(|i| manager.warning(format!("toast {i}"), None))
        .collect();
    assert_eq!(scheduled.len(), 5);

    manager.clear_all();

    assert_eq!(manager.visible_count(), 0);
    assert_eq!(manager.pending_count(), 0);
    assert!(scheduled.iter().all(ScheduledDismiss::is_cancelled));
}

#[test]
fn unknown_severity_renders_as_info() {
    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    let mut manager = Manager::new();
    let _ = manager.show_named("hello", "catastrophic", None);

    let notification = manager.visible().next().unwrap();
    assert_eq!(notification.severity(), Severity::Info);
    assert_eq!(Toast::content(notification, &i18n).title, "Info");
}

#[test]
fn script_tags_stay_literal() {
    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    let mut manager = Manager::new();
    let _ = manager.show_named("<script>alert('x')</script>", "danger", None);

    let notification = manager.visible().next().unwrap();
    let content = Toast::content(notification, &i18n);
    assert_eq!(content.message, "<script>alert('x')</script>");
    assert_eq!(content.title, "Error");
}

#[tokio::test(start_paused = true)]
async fn expiry_dismisses_and_promotes_next() {
    let mut manager = Manager::new();
    let mut scheduled: Vec<ScheduledDismiss> = (0..6)
        .filter_map(|i| manager.success(format!("toast {i}"), None))
        .collect();
    assert_eq!(manager.pending_count(), 1);

    let first = scheduled.remove(0);
    assert_eq!(first.delay(), Duration::from_millis(4000));

    let message = first.wait().await;
    assert!(matches!(message, NotificationMessage::Expired(_)));

    let promoted = manager.handle_message(&message).unwrap();
    assert_eq!(manager.visible_count(), 5);
    assert_eq!(manager.pending_count(), 0);

    let last = manager.visible().last().unwrap();
    assert_eq!(last.message(), "toast 5");
    assert_eq!(promoted.id(), last.id());
}

#[tokio::test(start_paused = true)]
async fn closing_a_toast_cancels_its_timer() {
    let mut manager = Manager::new();
    let scheduled = manager.error("boom", None).unwrap();
    assert_eq!(scheduled.delay(), Duration::from_millis(5000));
    let id = scheduled.id();

    let _ = manager.handle_message(&NotificationMessage::Dismiss(id));
    let message = scheduled.wait().await;

    assert!(matches!(message, NotificationMessage::TimerCancelled(cancelled) if cancelled == id));
    assert!(manager.handle_message(&message).is_none());
    assert!(manager.handle_message(&NotificationMessage::Expired(id)).is_none());
    assert_eq!(manager.visible_count(), 0);
}

#[test]
fn delete_trigger_configures_dialog() {
    let mut dialog = delete_confirmation::State::default();
    dialog.open(DeleteTrigger::new("/x/1", "Foo"));
    assert_eq!(dialog.label(), "Foo");
    assert_eq!(dialog.form_action(), Some("/x/1"));

    dialog.cancel();
    dialog.open(DeleteTrigger {
        delete_url: Some("/x/1".into()),
        entry_title: None,
    });
    assert_eq!(dialog.label(), "this entry");
}

#[test]
fn delete_flow_reaches_the_journal() {
    let mut journal = Journal::with_sample_entries();
    let entry = journal.entries().next().unwrap().clone();
    let mut dialog = delete_confirmation::State::default();

    dialog.open(entries::delete_trigger(&entry));
    let event = delete_confirmation::update(&mut dialog, delete_confirmation::Message::Confirm);
    let Event::Submit { action } = event else {
        panic!("expected a submission, got {event:?}");
    };
    assert_eq!(action, route::delete_entry(entry.id));
    assert!(!dialog.confirm_enabled());

    // Second press while pending is ignored
    assert_eq!(
        delete_confirmation::update(&mut dialog, delete_confirmation::Message::Confirm),
        Event::None
    );

    let removed = journal.delete_at(&action).unwrap();
    dialog.finish();
    assert_eq!(removed.id, entry.id);
    assert!(journal.get(entry.id).is_none());
    assert!(!dialog.is_open());
}

#[test]
fn new_entry_form_adds_to_the_journal() {
    let mut journal = Journal::new();
    let mut form = entry_form::State::new();

    for message in [
        entry_form::Message::DateChanged("2026-04-11 21:15".into()),
        entry_form::Message::MoodSelected(Mood::Excited),
        entry_form::Message::RatingSelected(5),
        entry_form::Message::TitleChanged("Concert".into()),
        entry_form::Message::ContentChanged("Front row.".into()),
        entry_form::Message::GratitudeChanged(1, "Friends".into()),
    ] {
        let _ = entry_form::update(&mut form, message);
    }

    let entry_form::Event::Saved(new_entry) = entry_form::update(&mut form, entry_form::Message::Save)
    else {
        panic!("expected a saved entry");
    };
    let id = journal.add(new_entry);

    let entry = journal.get(id).unwrap();
    assert_eq!(entry.title, "Concert");
    assert_eq!(entry.date.format("%Y-%m-%d %H:%M").to_string(), "2026-04-11 21:15");
    assert_eq!(entry.gratitude_items, vec!["Friends".to_string()]);
    assert_eq!(entries::delete_trigger(entry).delete_url, Some(route::delete_entry(id)));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("delete-dialog-fallback-label"), "cette entrée");
}

#[test]
fn malformed_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[notifications\nmax_visible = ")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn notifications_section_drives_manager_limits() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[notifications]\nmax_visible = 0\nduration_ms = 1500\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut manager = Manager::with_limits(
        config.notifications.max_visible(),
        config.notifications.duration(),
        config.notifications.error_duration(),
    );
    assert_eq!(manager.max_visible(), 1);

    let scheduled = manager.info("one", None).unwrap();
    assert_eq!(scheduled.delay(), Duration::from_millis(1500));
    assert!(manager.info("two", None).is_none());
    assert_eq!(manager.pending_count(), 1);
}
