//! Quality-driven spaced-repetition scheduling.
//!
//! The scheduler is a pure function over a card, a recall-quality
//! score, and the current date. A failed recall collapses the schedule
//! back to one day and resets the streak; a successful recall grows
//! the interval geometrically by the card's confidence factor, which
//! itself adapts toward the user's historical ease and is floored at
//! [`MIN_CONFIDENCE`].

use chrono::{Days, Local, NaiveDate};

use crate::card::Card;

/// Lower bound for a card's confidence factor.
pub const MIN_CONFIDENCE: f64 = 1.3;

/// Quality threshold separating "remembered" from "forgotten".
pub const REMEMBERED_THRESHOLD: u8 = 3;

/// Recall quality reported after a review, clamped to `0..=5`.
///
/// 5 is an effortless recall, 0 a total failure. Scores of
/// [`REMEMBERED_THRESHOLD`] and above count as remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    /// Total failure to recall.
    pub const FORGOT: Quality = Quality(0);

    /// Clamp an arbitrary score into range. Anything outside `0..=5`
    /// counts as 0, the same fallback applied to unparseable input.
    pub fn new(score: i64) -> Self {
        if (0..=5).contains(&score) {
            Quality(score as u8)
        } else {
            Quality::FORGOT
        }
    }

    /// Parse user input, treating unparseable text as 0.
    pub fn parse(input: &str) -> Self {
        input.trim().parse::<i64>().map_or(Quality::FORGOT, Quality::new)
    }

    /// The clamped score.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this score counts as a successful recall.
    pub fn remembered(self) -> bool {
        self.0 >= REMEMBERED_THRESHOLD
    }
}

/// Apply a review result to a card, rescheduling it relative to
/// `today`.
///
/// On a forgotten review the streak resets and the interval drops to
/// one day; the confidence factor is untouched. On a remembered review
/// the interval steps through 1 day, 6 days, then grows by the
/// confidence factor with the product truncated toward zero (not
/// rounded), the confidence factor shifts by the standard quality
/// delta and is floored at [`MIN_CONFIDENCE`], and the streak
/// increments. In every case the card becomes due `interval` days
/// after `today`.
pub fn update(card: &mut Card, quality: Quality, today: NaiveDate) {
    if !quality.remembered() {
        card.streak = 0;
        card.interval = 1;
    } else {
        card.interval = match card.streak {
            0 => 1,
            1 => 6,
            _ => (f64::from(card.interval) * card.confidence_factor) as u32,
        };
        let miss = f64::from(5 - quality.value());
        card.confidence_factor += 0.1 - miss * (0.08 + miss * 0.02);
        if card.confidence_factor < MIN_CONFIDENCE {
            card.confidence_factor = MIN_CONFIDENCE;
        }
        card.streak += 1;
    }
    card.due_date = today
        .checked_add_days(Days::new(u64::from(card.interval)))
        .unwrap_or(NaiveDate::MAX);
}

/// [`update`] against the local calendar date.
pub fn review(card: &mut Card, quality: Quality) {
    update(card, quality, Local::now().date_naive());
}
