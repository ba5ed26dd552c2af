// SPDX-License-Identifier: MPL-2.0
//! Routes used as submission targets by the delete dialog.
//!
//! A delete trigger carries its target as a path string
//! (`/entries/<id>/delete/`), the same shape the journal uses for its
//! delete endpoint. The trailing slash is optional when parsing.

use crate::error::{Error, Result};

const ENTRIES_PREFIX: &str = "/entries/";
const DELETE_SUFFIX: &str = "delete";

/// Builds the delete route for an entry.
#[must_use]
pub fn delete_entry(id: u64) -> String {
    format!("{ENTRIES_PREFIX}{id}/{DELETE_SUFFIX}/")
}

/// Extracts the entry id from a delete route.
pub fn parse_delete_entry(route: &str) -> Result<u64> {
    let invalid = || Error::InvalidRoute(route.to_string());

    let rest = route.strip_prefix(ENTRIES_PREFIX).ok_or_else(invalid)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let (id, action) = rest.split_once('/').ok_or_else(invalid)?;

    if action != DELETE_SUFFIX {
        return Err(invalid());
    }
    id.parse::<u64>().map_err(|_| invalid())
}
