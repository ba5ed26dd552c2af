// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers for visible toasts.
//!
//! Every toast that becomes visible gets a scheduled task: a sleep wrapped
//! in an [`Abortable`] future. The manager keeps the [`DismissTimer`] half
//! and hands the [`ScheduledDismiss`] half to the runtime. Dropping or
//! cancelling the timer aborts the sleep, so the task resolves to
//! [`Message::TimerCancelled`] instead of [`Message::Expired`].

use super::manager::Message;
use super::notification::NotificationId;
use futures_util::future::{AbortHandle, AbortRegistration, Abortable, Aborted};
use iced::Task;
use std::time::Duration;

/// Cancellation handle owned by a visible toast. Aborts on drop.
#[derive(Debug)]
pub(super) struct DismissTimer {
    handle: AbortHandle,
}

impl DismissTimer {
    pub(super) fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A pending auto-dismiss task that still has to be handed to the runtime.
#[derive(Debug)]
#[must_use = "a toast is never auto-dismissed unless its scheduled task runs"]
pub struct ScheduledDismiss {
    id: NotificationId,
    delay: Duration,
    registration: AbortRegistration,
    handle: AbortHandle,
}

/// Creates a linked timer/task pair for a toast.
pub(super) fn schedule(id: NotificationId, delay: Duration) -> (DismissTimer, ScheduledDismiss) {
    let (handle, registration) = AbortHandle::new_pair();
    let timer = DismissTimer {
        handle: handle.clone(),
    };
    let scheduled = ScheduledDismiss {
        id,
        delay,
        registration,
        handle,
    };
    (timer, scheduled)
}

impl ScheduledDismiss {
    /// The toast this task will dismiss.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the owning toast already cancelled this task.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }

    /// Sleeps for the delay unless cancelled first.
    pub async fn wait(self) -> Message {
        let ScheduledDismiss {
            id,
            delay,
            registration,
            ..
        } = self;

        match Abortable::new(tokio::time::sleep(delay), registration).await {
            Ok(()) => Message::Expired(id),
            Err(Aborted) => Message::TimerCancelled(id),
        }
    }

    /// Wraps the wait into an Iced task.
    pub fn into_task(self) -> Task<Message> {
        Task::perform(self.wait(), |message| message)
    }
}
