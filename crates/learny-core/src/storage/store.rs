//! Whole-file JSON persistence for the deck collection.
//!
//! The on-disk shape is a single JSON object mapping deck name to that
//! deck's ordered card records; the name is never repeated inside a
//! record. Loads and saves always cover the full collection, there are
//! no partial or incremental writes. Saves go through a temporary
//! sibling file and a rename, so a crash mid-write leaves the previous
//! contents intact.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{Result, StoreError};
use crate::storage::{data_dir, Config};

/// The full in-memory collection, keyed by deck name.
pub type DeckMap = BTreeMap<String, Deck>;

const DECKS_FILE: &str = "decks.json";

/// Whole-collection load/save of named decks.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store at its default location under [`data_dir`],
    /// honoring the `storage.data_file` override from the config file.
    pub fn open() -> Result<Self> {
        let config = Config::load_or_default();
        if let Some(path) = config.storage.data_file {
            return Ok(Self { path });
        }
        Ok(Self {
            path: data_dir()?.join(DECKS_FILE),
        })
    }

    /// Open a store backed by an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection; a missing file is an empty
    /// collection, not an error.
    ///
    /// # Errors
    /// A malformed file (bad JSON, bad date string, missing record
    /// field) aborts the load, so a later save cannot silently drop
    /// records it failed to read.
    pub fn load(&self) -> Result<DeckMap> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(DeckMap::new()),
            Err(e) => {
                return Err(StoreError::LoadFailed {
                    path: self.path.clone(),
                    source: e,
                }
                .into())
            }
        };

        let records: BTreeMap<String, Vec<Card>> =
            serde_json::from_str(&raw).map_err(|e| StoreError::ParseFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(records
            .into_iter()
            .map(|(name, cards)| {
                let deck = Deck {
                    name: name.clone(),
                    cards,
                };
                (name, deck)
            })
            .collect())
    }

    /// Replace the persisted collection with `decks`.
    ///
    /// The caller observes an atomic whole-file replace: the new
    /// contents are written to a temporary file in the same directory
    /// and renamed over the target.
    pub fn save(&self, decks: &DeckMap) -> Result<()> {
        let records: BTreeMap<&str, &[Card]> = decks
            .iter()
            .map(|(name, deck)| (name.as_str(), deck.cards.as_slice()))
            .collect();
        let json = serde_json::to_string_pretty(&records)?;

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::SaveFailed {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|e| StoreError::SaveFailed {
            path: self.path.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::SaveFailed {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::error::CoreError;

    fn store_in(dir: &TempDir) -> Store {
        Store::with_path(dir.path().join("decks.json"))
    }

    fn sample_decks() -> DeckMap {
        let mut spanish = Deck::new("spanish");
        spanish
            .add_card("hola", "hello", &["greeting".to_string()])
            .unwrap();
        spanish.add_card("adios", "goodbye", &[]).unwrap();

        let mut math = Deck::new("math");
        math.add_card("2+2", "4", &[]).unwrap();

        let mut decks = DeckMap::new();
        decks.insert(spanish.name.clone(), spanish);
        decks.insert(math.name.clone(), math);
        decks
    }

    #[test]
    fn missing_file_loads_as_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_the_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let decks = sample_decks();

        store.save(&decks).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, decks);
        // per-deck card order survives the round trip
        let cards: Vec<&str> = loaded["spanish"]
            .cards
            .iter()
            .map(|c| c.question.as_str())
            .collect();
        assert_eq!(cards, vec!["hola", "adios"]);
    }

    #[test]
    fn persisted_shape_maps_name_to_bare_card_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample_decks()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value["spanish"][0];
        assert_eq!(record["question"], "hola");
        assert!(record["dueDate"].is_string());
        assert!(record["confidenceFactor"].is_number());
        // deck name is implied by the outer key, never duplicated
        assert!(record.get("name").is_none());
    }

    #[test]
    fn malformed_json_aborts_the_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        match store.load() {
            Err(CoreError::Store(StoreError::ParseFailed { .. })) => {}
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_in_a_record_aborts_the_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let raw = r#"{
            "demo": [{
                "id": "abc",
                "question": "q",
                "answer": "a",
                "tags": [],
                "interval": 3,
                "dueDate": "06/01/2026",
                "confidenceFactor": 2.5,
                "streak": 1
            }]
        }"#;
        std::fs::write(store.path(), raw).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn loaded_dates_parse_back_to_calendar_dates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let raw = r#"{
            "demo": [{
                "id": "abc",
                "question": "q",
                "answer": "a",
                "tags": ["t"],
                "interval": 6,
                "dueDate": "2026-06-15",
                "confidenceFactor": 2.6,
                "streak": 2
            }]
        }"#;
        std::fs::write(store.path(), raw).unwrap();

        let decks = store.load().unwrap();
        let card = &decks["demo"].cards[0];
        assert_eq!(card.id, "abc");
        assert_eq!(card.due_date, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
        assert_eq!(card.streak, 2);
    }

    #[test]
    fn save_replaces_previous_contents_entirely() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample_decks()).unwrap();

        let mut smaller = DeckMap::new();
        smaller.insert("only".to_string(), Deck::new("only"));
        store.save(&smaller).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("only"));
    }
}
