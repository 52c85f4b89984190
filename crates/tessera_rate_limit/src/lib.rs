//! Rolling-window rate limiting for outbound API requests.
//!
//! This crate provides client-side enforcement of request quotas so that
//! callers queue locally instead of drawing rate-limit rejections from the
//! server. Quotas are modeled as rolling windows ("at most N requests within
//! any interval of length W") rather than fixed calendar buckets, which
//! matches how Trello meters its API.
//!
//! Two layers:
//! - [`QuotaTracker`] enforces one window by logging admission instants
//! - [`RateGovernor`] composes several trackers and admits a request only
//!   when all of them agree, charging none on refusal
//!
//! ```ignore
//! use tessera_rate_limit::{RateGovernor, RateWindow};
//!
//! let governor = RateGovernor::new([
//!     RateWindow::new(1_000, 10),
//!     RateWindow::new(600_000, 300),
//! ]);
//! governor.acquire().await; // suspends until every window has room
//! ```

mod governor;
mod tracker;
mod window;

pub use governor::RateGovernor;
pub use tracker::{Admission, QuotaTracker};
pub use window::RateWindow;
