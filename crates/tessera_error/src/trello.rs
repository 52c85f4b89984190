//! Trello API error classification.

/// Classified Trello API failure conditions.
///
/// The request executor assigns exactly one of these kinds to every failed
/// call, based on the HTTP status code (or its absence). Only
/// [`TrelloErrorKind::RateLimited`] is retried; all other kinds are terminal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TrelloErrorKind {
    /// Credentials were rejected by the API (HTTP 401)
    #[display(
        "Trello rejected the request credentials (HTTP {}): check that TRELLO_API_KEY and TRELLO_TOKEN are set and valid",
        status
    )]
    Authentication {
        /// HTTP status returned by the API
        status: u16,
    },
    /// The referenced resource does not exist (HTTP 404)
    #[display(
        "Trello resource not found at {}: the referenced board, list, or card id is likely wrong",
        path
    )]
    NotFound {
        /// Request path that produced the 404
        path: String,
    },
    /// The server signaled its own rate limit (HTTP 429)
    #[display("Trello rate limit exceeded (HTTP 429)")]
    RateLimited,
    /// Any other protocol-level failure (4xx/5xx)
    #[display("Trello API error (HTTP {}): {}", status, message)]
    Api {
        /// HTTP status returned by the API
        status: u16,
        /// Upstream message from the response body, or the status line
        message: String,
    },
    /// Network-level failure outside the HTTP protocol (reset, DNS, timeout)
    #[display("transport error: {}", message)]
    Transport {
        /// The underlying transport error message
        message: String,
    },
}

impl TrelloErrorKind {
    /// Check whether this failure is a server-side rate-limit signal.
    ///
    /// Rate-limit signals are the only failures the executor retries;
    /// everything else fails immediately.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, TrelloErrorKind::RateLimited)
    }
}

/// Trello error with source location tracking.
///
/// # Examples
///
/// ```
/// use tessera_error::{TrelloError, TrelloErrorKind};
///
/// let err = TrelloError::new(TrelloErrorKind::Authentication { status: 401 });
/// assert!(format!("{}", err).contains("TRELLO_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Trello Error: {} at line {} in {}", kind, line, file)]
pub struct TrelloError {
    /// The kind of error that occurred
    pub kind: TrelloErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TrelloError {
    /// Create a new TrelloError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TrelloErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Check whether this failure is a server-side rate-limit signal.
    pub fn is_rate_limited(&self) -> bool {
        self.kind.is_rate_limited()
    }
}
