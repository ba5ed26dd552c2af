// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`entries`] - Journal entry list with per-row delete buttons
//! - [`delete_confirmation`] - Modal dialog confirming a deletion
//! - [`entry_form`] - Form for writing a new entry
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod delete_confirmation;
pub mod design_tokens;
pub mod entries;
pub mod entry_form;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
