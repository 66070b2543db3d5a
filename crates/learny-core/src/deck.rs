//! Decks: named, insertion-ordered card collections with due-selection
//! and summary statistics.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{Result, ValidationError};

/// Point-in-time deck counters, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    pub due: usize,
    pub total: usize,
}

/// A named, insertion-ordered collection of cards.
///
/// Card order drives listing order and the "first due card" tie-break.
/// The deck never holds two cards with the same id; uniqueness of deck
/// names within a collection is the store/front-end layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Append a new card with default scheduling state and return a
    /// reference to it.
    ///
    /// Tags are deduplicated in insertion order.
    ///
    /// # Errors
    /// Returns a validation error when question or answer is empty or
    /// whitespace-only.
    pub fn add_card(&mut self, question: &str, answer: &str, tags: &[String]) -> Result<&Card> {
        if question.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "question" }.into());
        }
        if answer.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "answer" }.into());
        }

        let mut card = Card::new(question, answer);
        for tag in tags {
            card.add_tag(tag.clone());
        }
        self.cards.push(card);
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Cards due on `today` (inclusive), in insertion order.
    ///
    /// This is a query recomputed on each call, not a cursor.
    pub fn due_cards_on(&self, today: NaiveDate) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.is_due_on(today)).collect()
    }

    /// Cards due today, in insertion order.
    pub fn due_cards(&self) -> Vec<&Card> {
        self.due_cards_on(Local::now().date_naive())
    }

    /// Mutable due selection, so callers can run
    /// [`crate::srs::update`] on the deck's stored cards in place.
    pub fn due_cards_mut_on(&mut self, today: NaiveDate) -> Vec<&mut Card> {
        self.cards
            .iter_mut()
            .filter(|c| c.is_due_on(today))
            .collect()
    }

    /// Mutable selection of the cards due today.
    pub fn due_cards_mut(&mut self) -> Vec<&mut Card> {
        self.due_cards_mut_on(Local::now().date_naive())
    }

    /// Due and total counts relative to `today`.
    pub fn stats_on(&self, today: NaiveDate) -> DeckStats {
        DeckStats {
            due: self.cards.iter().filter(|c| c.is_due_on(today)).count(),
            total: self.cards.len(),
        }
    }

    /// Due and total counts relative to the local date.
    pub fn stats(&self) -> DeckStats {
        self.stats_on(Local::now().date_naive())
    }

    /// Look up a card by id. `None` is the not-found signal.
    pub fn find_card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Mutable lookup by id, used by tag management.
    pub fn find_card_mut(&mut self, id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }
}
