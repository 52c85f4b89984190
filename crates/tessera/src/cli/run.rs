//! Task-board command handlers.
//!
//! Each handler builds a client from the ambient configuration, makes one
//! client call, and prints the returned record as pretty JSON.

use chrono::{DateTime, Utc};
use tessera::{CardUpdate, NewCard, TesseraResult, TrelloClient, TrelloConfig};

/// Build a client from the environment and layered config files.
fn connect() -> TesseraResult<TrelloClient> {
    let config = TrelloConfig::load()?;
    TrelloClient::new(config)
}

/// Print a record as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> TesseraResult<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| tessera::JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Show the configured board.
pub async fn show_board() -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.get_board().await?)
}

/// Show the lists on the configured board.
pub async fn show_lists() -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.get_lists().await?)
}

/// Show the cards in a list.
pub async fn show_cards(list_id: &str) -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.get_cards_by_list(list_id).await?)
}

/// Show the cards assigned to the authenticated member.
pub async fn show_my_cards() -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.get_my_cards().await?)
}

/// Show recent activity on the configured board.
pub async fn show_activity(limit: Option<u32>) -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.get_recent_activity(limit).await?)
}

/// Add a card to a list.
pub async fn add_card(
    list_id: String,
    name: String,
    desc: Option<String>,
    due: Option<DateTime<Utc>>,
) -> TesseraResult<()> {
    let client = connect()?;
    let card = NewCard {
        id_list: list_id,
        name,
        desc,
        due,
        ..NewCard::default()
    };
    print_json(&client.add_card(&card).await?)
}

/// Update fields on a card.
pub async fn update_card(
    card_id: &str,
    name: Option<String>,
    desc: Option<String>,
    due: Option<DateTime<Utc>>,
) -> TesseraResult<()> {
    let client = connect()?;
    let update = CardUpdate {
        name,
        desc,
        due,
        ..CardUpdate::default()
    };
    print_json(&client.update_card(card_id, &update).await?)
}

/// Move a card to another list.
pub async fn move_card(card_id: &str, list_id: &str) -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.move_card(card_id, list_id).await?)
}

/// Archive a card.
pub async fn archive_card(card_id: &str) -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.archive_card(card_id).await?)
}

/// Add a list to the configured board.
pub async fn add_list(name: &str) -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.add_list(name).await?)
}

/// Archive a list.
pub async fn archive_list(list_id: &str) -> TesseraResult<()> {
    let client = connect()?;
    print_json(&client.archive_list(list_id).await?)
}
