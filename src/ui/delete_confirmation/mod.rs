// SPDX-License-Identifier: MPL-2.0
//! Confirmation dialog shared by every delete button of the entry list.
//!
//! A delete button carries a [`DeleteTrigger`]: the route the deletion is
//! submitted to and the title of the entry. Activating it configures the
//! single dialog owned by the application and shows it. Submitting disables
//! the confirm button until the destination has handled the request.
//!
//! ```text
//! Closed --open--> Open --submit--> Submitting --finish--> Closed
//!                   |
//!                   +--cancel--> Closed
//! ```

mod view;

pub use view::{view, ViewContext};

/// Metadata carried by a delete button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteTrigger {
    /// Route the confirmation form submits to.
    pub delete_url: Option<String>,
    /// Entry title shown in the dialog body.
    pub entry_title: Option<String>,
}

impl DeleteTrigger {
    pub fn new(delete_url: impl Into<String>, entry_title: impl Into<String>) -> Self {
        Self {
            delete_url: Some(delete_url.into()),
            entry_title: Some(entry_title.into()),
        }
    }
}

/// Dialog lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Messages emitted by the dialog widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Cancel,
    Confirm,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form was submitted; the parent must deliver it to `action`.
    Submit { action: String },
}

/// State of the delete confirmation dialog.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    form_action: Option<String>,
    label: String,
    fallback_label: String,
}

impl Default for State {
    fn default() -> Self {
        Self::new("this entry")
    }
}

impl State {
    /// Creates a closed dialog. `fallback_label` names the entry when the
    /// trigger has no title.
    pub fn new(fallback_label: impl Into<String>) -> Self {
        let fallback_label = fallback_label.into();
        Self {
            phase: Phase::Closed,
            form_action: None,
            label: fallback_label.clone(),
            fallback_label,
        }
    }

    /// Configures the dialog from a trigger and shows it.
    ///
    /// Ignored while a submission is in flight.
    pub fn open(&mut self, trigger: DeleteTrigger) {
        if self.phase == Phase::Submitting {
            log::debug!("Ignoring delete trigger while a submission is pending");
            return;
        }

        self.label = trigger
            .entry_title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| self.fallback_label.clone());
        self.form_action = trigger.delete_url.filter(|url| !url.is_empty());
        self.phase = Phase::Open;

        log::debug!("Delete dialog opened for {:?}", self.form_action);
    }

    /// Closes the dialog without submitting.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Open {
            self.phase = Phase::Closed;
            log::debug!("Delete dialog cancelled");
        }
    }

    /// Submits the form. Returns the action to deliver, or `None` when there
    /// is nothing to submit or a submission is already pending.
    pub fn submit(&mut self) -> Option<String> {
        if self.phase != Phase::Open {
            return None;
        }
        let action = self.form_action.clone()?;
        self.phase = Phase::Submitting;
        log::debug!("Delete dialog submitted to {action}");
        Some(action)
    }

    /// Closes the dialog once the destination has handled the submission and
    /// re-enables the confirm button.
    pub fn finish(&mut self) {
        self.phase = Phase::Closed;
        self.form_action = None;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Name of the entry shown in the dialog body.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Route the form submits to.
    #[must_use]
    pub fn form_action(&self) -> Option<&str> {
        self.form_action.as_deref()
    }

    /// Whether the confirm button accepts presses.
    #[must_use]
    pub fn confirm_enabled(&self) -> bool {
        self.phase == Phase::Open && self.form_action.is_some()
    }

    /// i18n key of the confirm button label; it reads "Deleting…" while a
    /// submission is pending.
    #[must_use]
    pub fn confirm_label_key(&self) -> &'static str {
        if self.is_submitting() {
            "delete-dialog-confirm-pending"
        } else {
            "delete-dialog-confirm"
        }
    }

    /// Whether the dialog is shown (open or submitting).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

/// Process a dialog message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Cancel => {
            state.cancel();
            Event::None
        }
        Message::Confirm => match state.submit() {
            Some(action) => Event::Submit { action },
            None => Event::None,
        },
    }
}
