// SPDX-License-Identifier: MPL-2.0
//! Inspirational quotes shown above the entry list.

use chrono::{Datelike, NaiveDate};

/// A short quote and its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    /// Blank when the author is unknown.
    pub author: &'static str,
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

pub const QUOTES: &[Quote] = &[
    quote("Self-care is how you take your power back.", "Lalah Delia"),
    quote(
        "Thoughts are only thoughts. They are not you. You belong to yourself, even when your thoughts don't.",
        "John Green",
    ),
    quote(
        "One small crack does not mean that you are broken, it means that you were put to the test and you didn't fall apart.",
        "Linda Poindexter",
    ),
    quote(
        "You, yourself, as much as anybody in the entire universe, deserve your love and affection.",
        "Buddha",
    ),
    quote(
        "Whatever you're worried about, you're bigger than the worries.",
        "John Green",
    ),
    quote("Owning your story is the bravest thing you'll ever do.", "Brené Brown"),
    quote(
        "Recovery is not one and done. It is a lifelong journey that takes place one day, one step at a time.",
        "",
    ),
    quote(
        "You don't have to control your thoughts; you just have to stop letting them control you.",
        "Dan Millman",
    ),
    quote("Be brave enough to heal yourself even when it hurts.", "Bianca Sparacino"),
    quote("Your now is not your forever.", "John Green"),
    quote(
        "You are allowed to be both a masterpiece and a work in progress simultaneously.",
        "Sophia Bush",
    ),
    quote("You don't have to struggle in silence.", "John Green"),
    quote("The best way out is always through.", "Robert Frost"),
];

impl Quote {
    /// Picks the quote of the day. The same date always yields the same quote.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> &'static Quote {
        let day = date.num_days_from_ce().rem_euclid(QUOTES.len() as i32) as usize;
        &QUOTES[day]
    }

    #[must_use]
    pub fn has_author(&self) -> bool {
        !self.author.trim().is_empty()
    }
}
