// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::delete_confirmation;
use crate::ui::entries;
use crate::ui::entry_form;
use crate::ui::notifications;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Entries(entries::Message),
    DeleteDialog(delete_confirmation::Message),
    EntryForm(entry_form::Message),
    Notification(notifications::NotificationMessage),
    /// The delete form was submitted to this route.
    DeleteSubmitted(String),
    EscapePressed,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional settings directory (`--config-dir`).
    pub config_dir: Option<PathBuf>,
}
