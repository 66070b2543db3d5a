//! Card management commands.

use clap::Subcommand;
use learny_core::{Deck, Store};

#[derive(Subcommand)]
pub enum CardAction {
    /// Add a card to a deck (creates the deck if missing)
    Add {
        /// Deck name
        deck: String,
        /// Question text
        question: String,
        /// Answer text
        answer: String,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// List the cards of a deck
    List {
        /// Deck name
        deck: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add or remove tags on a card
    Tag {
        /// Deck name
        deck: String,
        /// Card ID
        id: String,
        /// Tag to add (repeatable)
        #[arg(long = "add")]
        add: Vec<String>,
        /// Tag to remove (repeatable)
        #[arg(long = "remove")]
        remove: Vec<String>,
    },
}

pub fn run(action: CardAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut decks = store.load()?;

    match action {
        CardAction::Add {
            deck,
            question,
            answer,
            tags,
        } => {
            let tags: Vec<String> = tags
                .map(|t| {
                    t.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default();
            let entry = decks
                .entry(deck.clone())
                .or_insert_with(|| Deck::new(deck));
            let card = entry.add_card(&question, &answer, &tags)?;
            println!("Card added: {}", card.id);
            store.save(&decks)?;
        }
        CardAction::List { deck, json } => match decks.get(&deck) {
            Some(d) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&d.cards)?);
                } else {
                    for card in &d.cards {
                        let tags = if card.tags.is_empty() {
                            String::new()
                        } else {
                            format!("  [{}]", card.tags.join(", "))
                        };
                        println!("{}  due {}  {}{}", card.id, card.due_date, card.question, tags);
                    }
                }
            }
            None => println!("Deck not found"),
        },
        CardAction::Tag {
            deck,
            id,
            add,
            remove,
        } => {
            let d = decks
                .get_mut(&deck)
                .ok_or_else(|| format!("deck '{deck}' not found"))?;
            let card = d
                .find_card_mut(&id)
                .ok_or_else(|| format!("card '{id}' not found in deck '{deck}'"))?;
            for tag in add {
                card.add_tag(tag);
            }
            for tag in remove {
                card.remove_tag(&tag);
            }
            println!("Tags: {}", card.tags.join(", "));
            store.save(&decks)?;
        }
    }
    Ok(())
}
