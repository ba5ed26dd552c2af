// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and owns the cancellation handle of
//! every auto-dismiss task it schedules.

use super::notification::{Notification, NotificationId, Severity};
use super::timer::{self, DismissTimer, ScheduledDismiss};
use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 5;

/// Auto-dismiss delay for success, info and warning toasts.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Auto-dismiss delay for error toasts.
pub const DEFAULT_ERROR_DURATION: Duration = Duration::from_millis(5000);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(NotificationId),
    /// The auto-dismiss task of a toast ran to completion.
    Expired(NotificationId),
    /// The auto-dismiss task of a toast was aborted before firing.
    TimerCancelled(NotificationId),
}

#[derive(Debug)]
struct VisibleToast {
    notification: Notification,
    timer: DismissTimer,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    max_visible: usize,
    default_duration: Duration,
    error_duration: Duration,
    /// Currently visible notifications, oldest first.
    visible: VecDeque<VisibleToast>,
    /// Queued notifications waiting to be displayed.
    pending: VecDeque<Notification>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a new empty notification manager with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(MAX_VISIBLE, DEFAULT_DURATION, DEFAULT_ERROR_DURATION)
    }

    /// Creates a manager with a custom cap and default delays.
    ///
    /// A cap of zero is raised to one so queued toasts can always be shown.
    #[must_use]
    pub fn with_limits(max_visible: usize, default_duration: Duration, error_duration: Duration) -> Self {
        Self {
            max_visible: max_visible.max(1),
            default_duration,
            error_duration,
            visible: VecDeque::new(),
            pending: VecDeque::new(),
        }
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than the cap are showing, it becomes visible immediately and
    /// the returned task must be run to auto-dismiss it. Otherwise it is
    /// appended to the pending queue and shown when space becomes available.
    pub fn push(&mut self, notification: Notification) -> Option<ScheduledDismiss> {
        if self.visible.len() < self.max_visible {
            Some(self.make_visible(notification))
        } else {
            log::debug!(
                "Toast queue full ({} visible), queueing notification {:?}",
                self.visible.len(),
                notification.id()
            );
            self.pending.push_back(notification);
            None
        }
    }

    /// Shows a message with the given severity and optional custom delay.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> Option<ScheduledDismiss> {
        let mut notification = Notification::new(severity, message);
        if let Some(duration) = duration {
            notification = notification.auto_dismiss(duration);
        }
        self.push(notification)
    }

    /// Shows a message whose severity is given by name (`danger` means error,
    /// unknown names mean info).
    pub fn show_named(
        &mut self,
        message: impl Into<String>,
        severity: &str,
        duration: Option<Duration>,
    ) -> Option<ScheduledDismiss> {
        self.show(message, Severity::from_name(severity), duration)
    }

    pub fn success(&mut self, message: impl Into<String>, duration: Option<Duration>) -> Option<ScheduledDismiss> {
        self.show(message, Severity::Success, duration)
    }

    pub fn error(&mut self, message: impl Into<String>, duration: Option<Duration>) -> Option<ScheduledDismiss> {
        self.show(message, Severity::Error, duration)
    }

    pub fn info(&mut self, message: impl Into<String>, duration: Option<Duration>) -> Option<ScheduledDismiss> {
        self.show(message, Severity::Info, duration)
    }

    pub fn warning(&mut self, message: impl Into<String>, duration: Option<Duration>) -> Option<ScheduledDismiss> {
        self.show(message, Severity::Warning, duration)
    }

    /// Dismisses a visible notification by its ID and promotes the head of
    /// the pending queue into the freed slot.
    ///
    /// Pending notifications cannot be dismissed individually; unknown IDs
    /// are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<ScheduledDismiss> {
        let Some(pos) = self.visible.iter().position(|t| t.notification.id() == id) else {
            log::debug!("Ignoring dismissal of notification {id:?}: not visible");
            return None;
        };

        if let Some(toast) = self.visible.remove(pos) {
            toast.timer.cancel();
        }
        self.promote_next()
    }

    /// Moves the oldest pending notification to the visible set if there is
    /// room for it.
    pub fn promote_next(&mut self) -> Option<ScheduledDismiss> {
        if self.visible.len() >= self.max_visible {
            return None;
        }
        let notification = self.pending.pop_front()?;
        Some(self.make_visible(notification))
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) -> Option<ScheduledDismiss> {
        match message {
            Message::Dismiss(id) | Message::Expired(id) => self.dismiss(*id),
            Message::TimerCancelled(id) => {
                log::trace!("Auto-dismiss of notification {id:?} was cancelled");
                None
            }
        }
    }

    /// Dismisses every visible notification and discards the pending ones.
    ///
    /// All outstanding auto-dismiss tasks are cancelled.
    pub fn clear_all(&mut self) {
        let discarded = self.pending.len();
        self.pending.clear();

        for toast in self.visible.drain(..) {
            toast.timer.cancel();
        }

        log::debug!("Cleared all notifications ({discarded} pending discarded)");
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|toast| &toast.notification)
    }

    /// Returns the queued notifications, next to be shown first.
    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.pending.is_empty()
    }

    /// Resolves the auto-dismiss delay of a notification.
    #[must_use]
    pub fn duration_for(&self, notification: &Notification) -> Duration {
        notification
            .duration()
            .unwrap_or(match notification.severity() {
                Severity::Error => self.error_duration,
                Severity::Success | Severity::Info | Severity::Warning => self.default_duration,
            })
    }

    fn make_visible(&mut self, notification: Notification) -> ScheduledDismiss {
        let delay = self.duration_for(&notification);
        let (timer, scheduled) = timer::schedule(notification.id(), delay);
        self.visible.push_back(VisibleToast {
            notification,
            timer,
        });
        scheduled
    }
}
