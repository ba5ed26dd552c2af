// SPDX-License-Identifier: MPL-2.0
//! `mood_journal` is a small mood journal built with the Iced GUI framework.
//!
//! Its entry list pairs every delete button with a shared confirmation
//! dialog, and reports outcomes through a queue of toast notifications
//! with a capped number of toasts on screen.

pub mod app;
pub mod error;
pub mod i18n;
pub mod journal;
pub mod ui;

pub use app::config;
