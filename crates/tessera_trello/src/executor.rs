//! Rate-governed request execution.
//!
//! Every outbound call passes through [`RequestExecutor::execute`], which
//! acquires the rate governor before each attempt, classifies failures, and
//! retries server-side rate-limit responses on a fixed backoff. All other
//! failures are returned to the caller on the first occurrence.

use reqwest::Response;
use tessera_error::{TrelloError, TrelloErrorKind};
use tessera_rate_limit::{RateGovernor, RateWindow};
use tokio_retry2::strategy::FixedInterval;
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

/// Executes network operations under local rate governance with automatic
/// retry of HTTP 429 responses.
///
/// The executor distinguishes the local quota from the server's verdict:
/// the governor delays requests so 429s should not happen, and when one
/// happens anyway (another client sharing the token, clock skew) it is
/// absorbed by waiting out the configured backoff and re-entering the
/// governor rather than surfaced to the caller.
#[derive(Debug)]
pub struct RequestExecutor {
    governor: RateGovernor,
    retry_backoff_ms: u64,
    max_retries: Option<usize>,
}

impl RequestExecutor {
    /// Build an executor enforcing the given windows.
    ///
    /// `max_retries` caps how many 429 responses are retried before the
    /// rate-limit error is surfaced; `None` retries indefinitely.
    pub fn new(
        windows: impl IntoIterator<Item = RateWindow>,
        retry_backoff_ms: u64,
        max_retries: Option<usize>,
    ) -> Self {
        Self {
            governor: RateGovernor::new(windows),
            retry_backoff_ms,
            max_retries,
        }
    }

    /// Execute an operation with rate governance and automatic retry.
    ///
    /// For each attempt:
    /// 1. Waits until every rate window admits the request
    /// 2. Runs the operation (typically one HTTP request)
    /// 3. On HTTP 429, waits the fixed backoff and starts over from step 1
    /// 4. On any other failure, classifies it and returns immediately
    ///
    /// The operation is called once per attempt so each retry builds a
    /// fresh request.
    ///
    /// # Errors
    ///
    /// Returns the classified failure: authentication and missing-resource
    /// responses with actionable messages, other HTTP failures with the
    /// upstream message, and transport failures as they occurred.
    pub async fn execute<F, Fut>(&self, operation: F) -> Result<Response, TrelloError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<Response, reqwest::Error>>,
    {
        let action = || async {
            // Re-enter the governor before every attempt, so retries are
            // themselves rate-limited.
            self.governor.acquire().await;

            match operation().await {
                Ok(response) => {
                    if response.status().is_success() {
                        Ok(response)
                    } else {
                        let error = classify_response(response).await;
                        if error.is_rate_limited() {
                            warn!("Trello signaled a rate limit, will retry: {}", error);
                            Err(RetryError::Transient {
                                err: error,
                                retry_after: None,
                            })
                        } else {
                            warn!("Permanent error, failing immediately: {}", error);
                            Err(RetryError::Permanent(error))
                        }
                    }
                }
                Err(e) => {
                    let message = transport_message(&e);
                    warn!("Transport error, failing immediately: {}", message);
                    Err(RetryError::Permanent(TrelloError::new(
                        TrelloErrorKind::Transport { message },
                    )))
                }
            }
        };

        // FixedInterval yields backoff delays forever; the cap, when set,
        // bounds how many of them are taken before the last error surfaces.
        match self.max_retries {
            Some(cap) => {
                let retry_strategy = FixedInterval::from_millis(self.retry_backoff_ms).take(cap);
                Retry::spawn(retry_strategy, action).await
            }
            None => {
                let retry_strategy = FixedInterval::from_millis(self.retry_backoff_ms);
                Retry::spawn(retry_strategy, action).await
            }
        }
    }
}

/// Consume a non-success response and map it onto the error taxonomy.
async fn classify_response(response: Response) -> TrelloError {
    let status = response.status().as_u16();
    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    TrelloError::new(classify(status, &path, &body))
}

/// Status-code classification. 401 and 404 become terminal errors with
/// actionable messages, 429 marks the request retryable, and everything
/// else carries the upstream message through.
fn classify(status: u16, path: &str, body: &str) -> TrelloErrorKind {
    match status {
        401 => TrelloErrorKind::Authentication { status },
        404 => TrelloErrorKind::NotFound {
            path: path.to_owned(),
        },
        429 => TrelloErrorKind::RateLimited,
        _ => TrelloErrorKind::Api {
            status,
            message: upstream_message(status, body),
        },
    }
}

/// Flatten a transport failure into one message including its cause chain.
/// The outermost reqwest error names only the url; the causes underneath
/// say what actually went wrong, such as "operation timed out".
fn transport_message(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Extract a human-readable message from a Trello error body, which is
/// either plain text or a JSON object with a `message` field.
fn upstream_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {status} with empty body");
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|message| message.as_str())
            .map(str::to_owned)
            .unwrap_or_else(|| body.to_owned()),
        Err(_) => body.to_owned(),
    }
}
