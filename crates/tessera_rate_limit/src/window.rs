//! Rolling-window descriptions.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One rolling rate ceiling: at most `max_requests` admissions within any
/// interval of `duration_ms` milliseconds.
///
/// Trello publishes two such ceilings per token (a short burst window and a
/// longer sustained window); the client enforces both locally so requests
/// queue instead of drawing 429 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateWindow {
    /// Window length in milliseconds
    pub duration_ms: u64,
    /// Maximum admissions within the window
    pub max_requests: u32,
}

impl RateWindow {
    /// Create a window description.
    ///
    /// # Panics
    ///
    /// Panics if `duration_ms` or `max_requests` is zero. Descriptions read
    /// from configuration files are checked with [`RateWindow::is_valid`]
    /// before they reach this point.
    pub fn new(duration_ms: u64, max_requests: u32) -> Self {
        assert!(duration_ms > 0, "window duration must be greater than zero");
        assert!(max_requests > 0, "window ceiling must be greater than zero");
        Self {
            duration_ms,
            max_requests,
        }
    }

    /// Window length as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Whether both the length and the ceiling are nonzero.
    pub fn is_valid(&self) -> bool {
        self.duration_ms > 0 && self.max_requests > 0
    }
}
