// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of actions (entry
//! deleted, settings unreadable) without blocking interaction. This is the
//! user-facing error channel of the application.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`timer`] - Cancellable auto-dismiss tasks
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::new();
//!
//! // Showing a toast returns the auto-dismiss task to run
//! let task = manager
//!     .success("Entry deleted.", None)
//!     .map_or_else(Task::none, |scheduled| scheduled.into_task());
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager, &i18n);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 4s, 5s for errors (configurable)
//! - Max visible toasts: 5 (others are queued in arrival order)
//! - Position: top center

mod manager;
mod notification;
mod timer;
mod toast;

pub use manager::{
    Manager, Message as NotificationMessage, DEFAULT_DURATION, DEFAULT_ERROR_DURATION, MAX_VISIBLE,
};
pub use notification::{Notification, NotificationId, Severity};
pub use timer::ScheduledDismiss;
pub use toast::{Toast, ToastContent, ToastIcon};
