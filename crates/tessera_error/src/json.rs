//! JSON error types.

/// JSON serialization/deserialization error with source location.
///
/// Raised when a successful response body fails to decode into its domain
/// record. This is distinct from the protocol-level classification in
/// [`crate::TrelloErrorKind`] because the request itself succeeded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_error::JsonError;
    ///
    /// let err = JsonError::new("expected an array of cards");
    /// assert!(err.message.contains("array of cards"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
