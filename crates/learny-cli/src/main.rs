use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "learny-cli", version, about = "Learny flashcards CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deck management
    Deck {
        #[command(subcommand)]
        action: commands::deck::DeckAction,
    },
    /// Card management
    Card {
        #[command(subcommand)]
        action: commands::card::CardAction,
    },
    /// Review due cards
    Review(commands::review::ReviewArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Deck { action } => commands::deck::run(action),
        Commands::Card { action } => commands::card::run(action),
        Commands::Review(args) => commands::review::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
