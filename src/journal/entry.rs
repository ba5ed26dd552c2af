// SPDX-License-Identifier: MPL-2.0
//! Journal entry data structures.

use chrono::{DateTime, Local};

/// Maximum length of an entry title, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum length of a single gratitude item, in characters.
pub const GRATITUDE_MAX_LEN: usize = 255;

/// Number of gratitude items offered when writing an entry.
pub const GRATITUDE_SLOTS: usize = 3;

/// Mood a journal entry was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Anxious,
    Sad,
    Neutral,
    Excited,
    Frustrated,
    Calm,
    Stressed,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Anxious,
        Mood::Sad,
        Mood::Neutral,
        Mood::Excited,
        Mood::Frustrated,
        Mood::Calm,
        Mood::Stressed,
    ];

    /// Returns the i18n key for the mood label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Mood::Happy => "mood-happy",
            Mood::Anxious => "mood-anxious",
            Mood::Sad => "mood-sad",
            Mood::Neutral => "mood-neutral",
            Mood::Excited => "mood-excited",
            Mood::Frustrated => "mood-frustrated",
            Mood::Calm => "mood-calm",
            Mood::Stressed => "mood-stressed",
        }
    }
}

/// Mood rating, guaranteed to be within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoodRating(u8);

impl MoodRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a rating only if the value is within range.
    #[must_use]
    pub fn try_new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for MoodRating {
    fn default() -> Self {
        Self(3)
    }
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: u64,
    pub date: DateTime<Local>,
    pub mood: Mood,
    pub mood_rating: MoodRating,
    pub title: String,
    pub content: String,
    /// Short "things I'm grateful for" items attached to the entry.
    pub gratitude_items: Vec<String>,
}

/// Fields of an entry before it is assigned an id.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: DateTime<Local>,
    pub mood: Mood,
    pub mood_rating: MoodRating,
    pub title: String,
    pub content: String,
    pub gratitude_items: Vec<String>,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, mood: Mood) -> Self {
        Self {
            date: Local::now(),
            mood,
            mood_rating: MoodRating::default(),
            title: title.into(),
            content: String::new(),
            gratitude_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: DateTime<Local>) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.mood_rating = MoodRating::new(rating);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Adds a gratitude item; blank items are skipped.
    #[must_use]
    pub fn with_gratitude(mut self, item: impl Into<String>) -> Self {
        let item = item.into();
        if !item.trim().is_empty() {
            self.gratitude_items.push(item);
        }
        self
    }
}
