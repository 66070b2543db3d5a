//! Deck management commands.

use clap::Subcommand;
use learny_core::{Deck, Store};

#[derive(Subcommand)]
pub enum DeckAction {
    /// Create a new deck
    Add {
        /// Deck name
        name: String,
    },
    /// List decks with card counts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DeckAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut decks = store.load()?;

    match action {
        DeckAction::Add { name } => {
            // Advisory duplicate check; an existing deck is left untouched.
            if decks.contains_key(&name) {
                println!("Deck already exists");
            } else {
                decks.insert(name.clone(), Deck::new(name.clone()));
                store.save(&decks)?;
                println!("Added deck '{name}'");
            }
        }
        DeckAction::List { json } => {
            if json {
                let summary: Vec<_> = decks
                    .values()
                    .map(|deck| {
                        let stats = deck.stats();
                        serde_json::json!({
                            "name": deck.name,
                            "total": stats.total,
                            "due": stats.due,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for deck in decks.values() {
                    let stats = deck.stats();
                    println!("{}: {} cards, {} due", deck.name, stats.total, stats.due);
                }
            }
        }
    }
    Ok(())
}
