//! CLI command definitions.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Tessera - rate-limited Trello task-board client
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(about = "Rate-limited Trello task-board client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the configured board
    Board,

    /// Show the lists on the configured board
    Lists,

    /// Show the cards in a list
    Cards {
        /// Id of the list to read
        list_id: String,
    },

    /// Show the cards assigned to you
    MyCards,

    /// Show recent activity on the configured board
    Activity {
        /// Maximum number of actions to show
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Add a card to a list
    AddCard {
        /// Id of the list that receives the card
        list_id: String,

        /// Card name
        name: String,

        /// Card description
        #[arg(long)]
        desc: Option<String>,

        /// Due date in RFC 3339 form, e.g. 2026-09-01T12:00:00Z
        #[arg(long)]
        due: Option<DateTime<Utc>>,
    },

    /// Update fields on a card
    UpdateCard {
        /// Id of the card to update
        card_id: String,

        /// New card name
        #[arg(long)]
        name: Option<String>,

        /// New card description
        #[arg(long)]
        desc: Option<String>,

        /// New due date in RFC 3339 form
        #[arg(long)]
        due: Option<DateTime<Utc>>,
    },

    /// Move a card to another list
    MoveCard {
        /// Id of the card to move
        card_id: String,

        /// Id of the destination list
        list_id: String,
    },

    /// Archive a card
    ArchiveCard {
        /// Id of the card to archive
        card_id: String,
    },

    /// Add a list to the configured board
    AddList {
        /// List name
        name: String,
    },

    /// Archive a list
    ArchiveList {
        /// Id of the list to archive
        list_id: String,
    },
}
