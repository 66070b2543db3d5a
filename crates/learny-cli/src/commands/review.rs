//! Review session over a deck's due cards.
//!
//! Interactive by default: question, reveal, quality prompt, repeated
//! for every due card, with one save at the end. `--quality` instead
//! grades just the first due card without prompting.

use std::io::{BufRead, Write};

use clap::Args;
use learny_core::srs::{self, Quality};
use learny_core::{Config, Store};

#[derive(Args)]
pub struct ReviewArgs {
    /// Deck to review
    pub deck: String,
    /// Grade the first due card with this quality instead of prompting
    #[arg(long)]
    pub quality: Option<i64>,
}

pub fn run(args: ReviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let config = Config::load_or_default();
    let mut decks = store.load()?;

    let deck = match decks.get_mut(&args.deck) {
        Some(deck) => deck,
        None => {
            println!("No cards due");
            return Ok(());
        }
    };

    if let Some(score) = args.quality {
        let quality = Quality::new(score);
        let next_due = {
            let due = deck.due_cards_mut();
            match due.into_iter().next() {
                Some(card) => {
                    srs::review(card, quality);
                    Some(card.due_date)
                }
                None => None,
            }
        };
        match next_due {
            Some(next) => {
                if config.review.show_next_due {
                    println!("Next review on {next}");
                }
                store.save(&decks)?;
            }
            None => println!("No cards due"),
        }
        return Ok(());
    }

    let mut reviewed = 0usize;
    {
        let due = deck.due_cards_mut();
        if due.is_empty() {
            println!("No cards due");
            return Ok(());
        }

        let stdin = std::io::stdin();
        let mut line = String::new();
        for card in due {
            println!("Question: {}", card.question);
            print!("Press Enter to show answer...");
            std::io::stdout().flush()?;
            line.clear();
            stdin.lock().read_line(&mut line)?;
            println!("Answer: {}\n", card.answer);

            println!("How did you do? (5=Easy, 4=Good, 3=Hard, <3=Again)");
            print!("Quality [0-5]: ");
            std::io::stdout().flush()?;
            line.clear();
            stdin.lock().read_line(&mut line)?;

            srs::review(card, Quality::parse(&line));
            if config.review.show_next_due {
                println!("Next review on {}\n", card.due_date);
            }
            reviewed += 1;
        }
    }

    store.save(&decks)?;
    println!("Reviewed {reviewed} card(s)");
    Ok(())
}
