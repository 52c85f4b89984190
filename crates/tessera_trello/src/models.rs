//! Task-board records exchanged with the Trello API.
//!
//! These are thin pass-throughs of Trello's JSON shapes. Fields the client
//! does not use are left to serde's unknown-field handling rather than
//! modeled here, and no validation happens beyond deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Trello board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Board identifier
    pub id: String,
    /// Board name
    pub name: String,
    /// Board description
    #[serde(default)]
    pub desc: String,
    /// Whether the board is closed (archived)
    #[serde(default)]
    pub closed: bool,
    /// Web URL of the board
    #[serde(default)]
    pub url: Option<String>,
}

/// A list (column) on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloList {
    /// List identifier
    pub id: String,
    /// List name
    pub name: String,
    /// Whether the list is closed (archived)
    #[serde(default)]
    pub closed: bool,
    /// Board the list belongs to
    #[serde(default)]
    pub id_board: Option<String>,
    /// Position of the list on the board
    #[serde(default)]
    pub pos: Option<f64>,
}

/// A label attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Label identifier
    pub id: String,
    /// Label name, often empty
    #[serde(default)]
    pub name: String,
    /// Label color, absent for colorless labels
    #[serde(default)]
    pub color: Option<String>,
}

/// A card on a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier
    pub id: String,
    /// Card name
    pub name: String,
    /// Card description
    #[serde(default)]
    pub desc: String,
    /// List the card sits in
    pub id_list: String,
    /// Board the card belongs to
    #[serde(default)]
    pub id_board: Option<String>,
    /// Whether the card is closed (archived)
    #[serde(default)]
    pub closed: bool,
    /// Due date, if one is set
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    /// Labels attached to the card
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Web URL of the card
    #[serde(default)]
    pub url: Option<String>,
    /// Instant of the last activity on the card
    #[serde(default)]
    pub date_last_activity: Option<DateTime<Utc>>,
}

/// One entry in a board's activity feed.
///
/// Trello's action payloads vary wildly by action type, so the `data` and
/// `member_creator` fields stay as raw JSON for the caller to pick apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardAction {
    /// Action identifier
    pub id: String,
    /// Action type, e.g. `createCard` or `updateList`
    #[serde(rename = "type")]
    pub action_type: String,
    /// Instant the action happened
    pub date: DateTime<Utc>,
    /// Type-specific payload
    #[serde(default)]
    pub data: serde_json::Value,
    /// Member who performed the action
    #[serde(default)]
    pub member_creator: Option<serde_json::Value>,
}

/// Parameters for creating a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    /// List that receives the card
    pub id_list: String,
    /// Card name
    pub name: String,
    /// Card description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    /// Position in the list: `top`, `bottom`, or a numeric rank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

/// Changed fields for updating a card. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    /// New card name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New card description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// New due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    /// New closed (archived) state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    /// List to move the card to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_list: Option<String>,
}
