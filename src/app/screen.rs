// SPDX-License-Identifier: MPL-2.0
//! Screen navigation state.

/// Which screen fills the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Entries,
    NewEntry,
}
