//! Rate-limited Trello API client.
//!
//! This crate wraps the Trello REST API for a single task board, keeping
//! every outbound request inside Trello's published quota so callers never
//! have to think about rate limits:
//!
//! - [`TrelloConfig`] loads credentials from the environment and tunables
//!   from layered TOML files
//! - [`RequestExecutor`] gates each request behind the rolling-window rate
//!   governor and absorbs HTTP 429 responses by retrying on a fixed backoff
//! - [`TrelloClient`] exposes the board operations themselves: reading the
//!   board, its lists, cards and activity, and creating, updating, moving
//!   and archiving cards and lists
//!
//! ```ignore
//! use tessera_trello::{TrelloClient, TrelloConfig};
//!
//! let client = TrelloClient::new(TrelloConfig::load()?)?;
//! let lists = client.get_lists().await?;
//! ```

mod client;
mod config;
mod executor;
pub mod models;

pub use client::TrelloClient;
pub use config::TrelloConfig;
pub use executor::RequestExecutor;
pub use models::{Board, BoardAction, Card, CardUpdate, Label, NewCard, TrelloList};
