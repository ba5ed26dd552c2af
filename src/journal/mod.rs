// SPDX-License-Identifier: MPL-2.0
//! In-memory mood journal.
//!
//! The journal owns the entries shown on the list screen and is the
//! destination of delete submissions. Nothing is written to disk.

mod entry;
pub mod quote;
pub mod route;

pub use entry::{
    Entry, Mood, MoodRating, NewEntry, GRATITUDE_MAX_LEN, GRATITUDE_SLOTS, TITLE_MAX_LEN,
};
pub use quote::Quote;

use crate::error::{Error, Result};
use chrono::{Duration, Local};

/// Collection of journal entries, kept in descending date order.
#[derive(Debug)]
pub struct Journal {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a journal pre-filled with a few entries so the list screen
    /// has something to show on first launch.
    #[must_use]
    pub fn with_sample_entries() -> Self {
        let mut journal = Self::new();
        let now = Local::now();

        journal.add(
            NewEntry::new("Day One", Mood::Excited)
                .with_date(now - Duration::days(2))
                .with_rating(4)
                .with_content("Started keeping a journal.")
                .with_gratitude("A quiet morning"),
        );
        journal.add(
            NewEntry::new("Rainy walk", Mood::Calm)
                .with_date(now - Duration::days(1))
                .with_rating(3)
                .with_content("Long walk in the rain, no umbrella.")
                .with_gratitude("Warm tea afterwards")
                .with_gratitude("Good podcast"),
        );
        journal.add(
            NewEntry::new("Deadline", Mood::Stressed)
                .with_date(now)
                .with_rating(2)
                .with_content("Too much to do, not enough hours."),
        );
        journal.add(NewEntry::new("", Mood::Neutral).with_date(now - Duration::days(3)));

        journal
    }

    /// Adds an entry and returns its id.
    pub fn add(&mut self, new: NewEntry) -> u64 {
        let id = self.next_id;
        self.next_id = id + 1;

        let entry = Entry {
            id,
            date: new.date,
            mood: new.mood,
            mood_rating: new.mood_rating,
            title: new.title,
            content: new.content,
            gratitude_items: new.gratitude_items,
        };

        let position = self
            .entries
            .iter()
            .position(|existing| existing.date < entry.date)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, entry);

        id
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Removes the entry with the given id.
    pub fn delete(&mut self, id: u64) -> Result<Entry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(Error::EntryNotFound(id))?;
        Ok(self.entries.remove(position))
    }

    /// Handles a delete submission addressed to `route`.
    pub fn delete_at(&mut self, route: &str) -> Result<Entry> {
        let id = route::parse_delete_entry(route)?;
        let entry = self.delete(id)?;
        log::info!("Deleted journal entry {id}");
        Ok(entry)
    }
}
