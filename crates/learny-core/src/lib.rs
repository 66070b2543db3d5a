//! # Learny Core Library
//!
//! This library provides the core business logic for the Learny
//! flashcard trainer. It implements a CLI-first philosophy where every
//! operation is available through this library, with front ends acting
//! as thin layers over the same types: they call deck and scheduler
//! operations plus the store, and never touch scheduling fields
//! directly.
//!
//! ## Architecture
//!
//! - **Scheduler**: a pure transition rule over (card, quality score,
//!   current date); failure collapses the schedule, success grows it
//!   geometrically by a per-card confidence factor
//! - **Storage**: whole-file JSON persistence of the full deck
//!   collection and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Card`]: a flashcard with its spaced-repetition state
//! - [`Deck`]: insertion-ordered card collection with due-selection
//!   and statistics
//! - [`srs`]: the quality-driven scheduling rule
//! - [`Store`]: load/save of the full collection, keyed by deck name
//! - [`Config`]: application configuration management

pub mod card;
pub mod deck;
pub mod error;
pub mod srs;
pub mod storage;

pub use card::Card;
pub use deck::{Deck, DeckStats};
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use srs::Quality;
pub use storage::{Config, DeckMap, Store};
