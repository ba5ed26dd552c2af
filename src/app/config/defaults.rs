// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: u32 = 5;

/// Smallest accepted visible-toast cap.
pub const MIN_MAX_VISIBLE_TOASTS: u32 = 1;

/// Largest accepted visible-toast cap.
pub const MAX_MAX_VISIBLE_TOASTS: u32 = 20;

/// Default auto-dismiss delay for success, info and warning toasts (ms).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Default auto-dismiss delay for error toasts (ms).
pub const DEFAULT_ERROR_TOAST_DURATION_MS: u64 = 5000;

/// Shortest accepted auto-dismiss delay (ms).
pub const MIN_TOAST_DURATION_MS: u64 = 500;
