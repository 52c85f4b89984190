//! Tessera - Rate-Limited Trello Task-Board Client
//!
//! Tessera wraps the Trello REST API for a single task board and keeps every
//! outbound request inside Trello's published quota. Requests queue locally
//! behind a rolling-window rate governor instead of drawing 429 responses,
//! and the occasional 429 that slips through anyway is absorbed by retrying
//! on a fixed backoff.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tessera::{TrelloClient, TrelloConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads TRELLO_API_KEY, TRELLO_TOKEN, and TRELLO_BOARD_ID from the
//!     // environment, and tunables from layered tessera.toml files.
//!     let client = TrelloClient::new(TrelloConfig::load()?)?;
//!
//!     for list in client.get_lists().await? {
//!         println!("{}: {}", list.id, list.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Tessera is organized as a workspace with focused crates:
//!
//! - `tessera_error` - Error types
//! - `tessera_rate_limit` - Rolling-window quota tracking and admission
//! - `tessera_trello` - Configuration, request execution, and the client
//!
//! This crate (`tessera`) re-exports everything for convenience and carries
//! the command-line binary.

pub use tessera_error::{
    ConfigError, JsonError, TesseraError, TesseraErrorKind, TesseraResult, TrelloError,
    TrelloErrorKind,
};
pub use tessera_rate_limit::{Admission, QuotaTracker, RateGovernor, RateWindow};
pub use tessera_trello::{
    Board, BoardAction, Card, CardUpdate, Label, NewCard, RequestExecutor, TrelloClient,
    TrelloConfig, TrelloList, models,
};
