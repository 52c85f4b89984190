//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, TrelloError};

/// This is the foundation error enum for the tessera workspace.
///
/// # Examples
///
/// ```
/// use tessera_error::{TesseraError, TrelloError, TrelloErrorKind};
///
/// let api_err = TrelloError::new(TrelloErrorKind::RateLimited);
/// let err: TesseraError = api_err.into();
/// assert!(format!("{}", err).contains("rate limit"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TesseraErrorKind {
    /// Classified Trello API error
    #[from(TrelloError)]
    Trello(TrelloError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Tessera error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tessera_error::{ConfigError, TesseraResult};
///
/// fn might_fail() -> TesseraResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tessera Error: {}", _0)]
pub struct TesseraError(Box<TesseraErrorKind>);

impl TesseraError {
    /// Create a new error from a kind.
    pub fn new(kind: TesseraErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TesseraErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to TesseraErrorKind
impl<T> From<T> for TesseraError
where
    T: Into<TesseraErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for tessera operations.
///
/// # Examples
///
/// ```
/// use tessera_error::{JsonError, TesseraResult};
///
/// fn decode() -> TesseraResult<String> {
///     Err(JsonError::new("unexpected end of input"))?
/// }
/// ```
pub type TesseraResult<T> = std::result::Result<T, TesseraError>;
