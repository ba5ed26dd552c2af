// SPDX-License-Identifier: MPL-2.0
//! Form for writing a new journal entry.
//!
//! The form collects the date (prefilled with the current time), a mood, a
//! 1 to 5 rating, the title, the text and up to three gratitude items.
//! Saving validates every field at once; blank gratitude slots are dropped.

mod view;

pub use view::{view, ViewContext};

use crate::journal::{Mood, MoodRating, NewEntry, GRATITUDE_MAX_LEN, GRATITUDE_SLOTS, TITLE_MAX_LEN};
use chrono::{DateTime, Local, NaiveDateTime};

/// Format of the date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    InvalidDate,
    MissingMood,
    InvalidRating,
    MissingTitle,
    TitleTooLong,
    MissingContent,
    GratitudeTooLong,
}

impl FieldError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::InvalidDate => "entry-form-error-date",
            FieldError::MissingMood => "entry-form-error-mood",
            FieldError::InvalidRating => "entry-form-error-rating",
            FieldError::MissingTitle => "entry-form-error-title",
            FieldError::TitleTooLong => "entry-form-error-title-length",
            FieldError::MissingContent => "entry-form-error-content",
            FieldError::GratitudeTooLong => "entry-form-error-gratitude-length",
        }
    }
}

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    DateChanged(String),
    MoodSelected(Mood),
    RatingSelected(u8),
    TitleChanged(String),
    ContentChanged(String),
    GratitudeChanged(usize, String),
    Save,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Cancelled,
    Saved(NewEntry),
}

/// State of the entry form.
#[derive(Debug, Clone)]
pub struct State {
    date: String,
    mood: Option<Mood>,
    rating: Option<u8>,
    title: String,
    content: String,
    gratitude: [String; GRATITUDE_SLOTS],
    errors: Vec<FieldError>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates an empty form dated now.
    #[must_use]
    pub fn new() -> Self {
        Self::dated(Local::now())
    }

    /// Creates an empty form with the date field set to `date`.
    #[must_use]
    pub fn dated(date: DateTime<Local>) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            mood: None,
            rating: None,
            title: String::new(),
            content: String::new(),
            gratitude: Default::default(),
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    #[must_use]
    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn gratitude(&self) -> &[String] {
        &self.gratitude
    }

    /// Errors from the last save attempt.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Checks every field and builds the entry.
    pub fn validate(&self) -> Result<NewEntry, Vec<FieldError>> {
        let mut errors = Vec::new();

        let date = NaiveDateTime::parse_from_str(self.date.trim(), DATE_FORMAT)
            .ok()
            .and_then(|naive| naive.and_local_timezone(Local).earliest());
        if date.is_none() {
            errors.push(FieldError::InvalidDate);
        }
        if self.mood.is_none() {
            errors.push(FieldError::MissingMood);
        }
        let rating = self.rating.and_then(MoodRating::try_new);
        if rating.is_none() {
            errors.push(FieldError::InvalidRating);
        }

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(FieldError::MissingTitle);
        } else if title.chars().count() > TITLE_MAX_LEN {
            errors.push(FieldError::TitleTooLong);
        }
        if self.content.trim().is_empty() {
            errors.push(FieldError::MissingContent);
        }
        if self
            .gratitude
            .iter()
            .any(|item| item.trim().chars().count() > GRATITUDE_MAX_LEN)
        {
            errors.push(FieldError::GratitudeTooLong);
        }

        match (date, self.mood, rating) {
            (Some(date), Some(mood), Some(rating)) if errors.is_empty() => {
                let entry = self.gratitude.iter().fold(
                    NewEntry::new(title, mood)
                        .with_date(date)
                        .with_rating(rating.value())
                        .with_content(self.content.trim()),
                    |entry, item| entry.with_gratitude(item.trim()),
                );
                Ok(entry)
            }
            _ => Err(errors),
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::DateChanged(date) => state.date = date,
        Message::MoodSelected(mood) => state.mood = Some(mood),
        Message::RatingSelected(rating) => state.rating = Some(rating),
        Message::TitleChanged(title) => state.title = title,
        Message::ContentChanged(content) => state.content = content,
        Message::GratitudeChanged(slot, item) => {
            if let Some(existing) = state.gratitude.get_mut(slot) {
                *existing = item;
            }
        }
        Message::Save => {
            return match state.validate() {
                Ok(entry) => {
                    state.reset();
                    Event::Saved(entry)
                }
                Err(errors) => {
                    log::debug!("Entry form rejected: {errors:?}");
                    state.errors = errors;
                    Event::None
                }
            };
        }
        Message::Cancel => {
            state.reset();
            return Event::Cancelled;
        }
    }
    Event::None
}
