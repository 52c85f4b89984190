//! Tessera CLI binary.
//!
//! This binary provides command-line access to the rate-limited Trello
//! client: reading the configured board, its lists, cards and activity, and
//! creating, updating, moving and archiving cards and lists.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands};

    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Board => {
            cli::show_board().await?;
        }

        Commands::Lists => {
            cli::show_lists().await?;
        }

        Commands::Cards { list_id } => {
            cli::show_cards(&list_id).await?;
        }

        Commands::MyCards => {
            cli::show_my_cards().await?;
        }

        Commands::Activity { limit } => {
            cli::show_activity(limit).await?;
        }

        Commands::AddCard {
            list_id,
            name,
            desc,
            due,
        } => {
            cli::add_card(list_id, name, desc, due).await?;
        }

        Commands::UpdateCard {
            card_id,
            name,
            desc,
            due,
        } => {
            cli::update_card(&card_id, name, desc, due).await?;
        }

        Commands::MoveCard { card_id, list_id } => {
            cli::move_card(&card_id, &list_id).await?;
        }

        Commands::ArchiveCard { card_id } => {
            cli::archive_card(&card_id).await?;
        }

        Commands::AddList { name } => {
            cli::add_list(&name).await?;
        }

        Commands::ArchiveList { list_id } => {
            cli::archive_list(&list_id).await?;
        }
    }

    Ok(())
}
