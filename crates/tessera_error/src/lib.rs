//! Error types for the tessera workspace.
//!
//! This crate provides the foundation error types used throughout the
//! tessera ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The request executor classifies every protocol-level failure exactly once
//! into a [`TrelloErrorKind`]; layers above it only propagate.
//!
//! # Examples
//!
//! ```
//! use tessera_error::{ConfigError, TesseraResult};
//!
//! fn load_board_id() -> TesseraResult<String> {
//!     Err(ConfigError::new("TRELLO_BOARD_ID is not set"))?
//! }
//!
//! match load_board_id() {
//!     Ok(id) => println!("board: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod trello;

pub use config::ConfigError;
pub use error::{TesseraError, TesseraErrorKind, TesseraResult};
pub use json::JsonError;
pub use trello::{TrelloError, TrelloErrorKind};
