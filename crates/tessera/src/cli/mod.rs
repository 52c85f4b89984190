//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! tessera binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{
    add_card, add_list, archive_card, archive_list, move_card, show_activity, show_board,
    show_cards, show_lists, show_my_cards, update_card,
};
