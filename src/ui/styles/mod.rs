// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons, containers and overlays.

pub mod button;
pub mod container;
pub mod overlay;
