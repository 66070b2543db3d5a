//! Flashcard entity and its scheduling state.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Confidence factor assigned to a freshly created card.
pub const INITIAL_CONFIDENCE: f64 = 2.5;

/// A single flashcard with its spaced-repetition state.
///
/// The scheduling fields (`interval`, `due_date`, `confidence_factor`,
/// `streak`) are owned by [`crate::srs::update`]; front ends read them
/// but never write them directly.
///
/// Serialization uses camelCase keys and an ISO `YYYY-MM-DD` string
/// for the due date, the shape persisted by [`crate::storage::Store`].
/// Every field is required on decode: a record with a missing field or
/// a malformed date fails at the decode boundary instead of being
/// patched up silently, and an `id` present in the input is preserved
/// exactly, never regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier (UUID v4 as string), assigned once at creation.
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Insertion-ordered, duplicate-free tags.
    pub tags: Vec<String>,
    /// Days until the next review, always >= 1.
    pub interval: u32,
    /// Calendar date on which the card becomes due (inclusive).
    pub due_date: NaiveDate,
    /// Per-card ease multiplier, never below 1.3.
    pub confidence_factor: f64,
    /// Consecutive remembered reviews since the last lapse.
    pub streak: u32,
}

impl Card {
    /// Create a card that is due immediately, with default scheduling
    /// state.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::with_creation_date(question, answer, Local::now().date_naive())
    }

    /// Create a card whose due date is the given creation date.
    pub fn with_creation_date(
        question: impl Into<String>,
        answer: impl Into<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            question: question.into(),
            answer: answer.into(),
            tags: Vec::new(),
            interval: 1,
            due_date: created_on,
            confidence_factor: INITIAL_CONFIDENCE,
            streak: 0,
        }
    }

    /// Whether the card is due on the given date (inclusive).
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        self.due_date <= today
    }

    /// Add a tag, preserving insertion order and skipping duplicates.
    /// Returns whether the tag was actually added.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.tags.iter().any(|t| *t == tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}
