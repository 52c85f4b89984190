//! All-or-nothing admission across several rolling windows.

use crate::{Admission, QuotaTracker, RateWindow};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

/// Gates outbound requests behind a set of [`QuotaTracker`]s.
///
/// A request is admitted only when every tracker has capacity at the same
/// instant, and a pass that any tracker refuses charges none of them. All
/// admission passes run under one async mutex, so two concurrent callers can
/// never both take the last slot of a window. The mutex is released before
/// any waiting happens; callers blocked on a full window do not starve
/// callers that arrive after capacity frees up.
///
/// An empty window set admits unconditionally.
#[derive(Debug)]
pub struct RateGovernor {
    trackers: Mutex<Vec<QuotaTracker>>,
}

impl RateGovernor {
    /// Build a governor enforcing every given window at once.
    pub fn new(windows: impl IntoIterator<Item = RateWindow>) -> Self {
        let trackers: Vec<QuotaTracker> = windows.into_iter().map(QuotaTracker::new).collect();
        debug!(windows = trackers.len(), "Rate governor initialized");
        Self {
            trackers: Mutex::new(trackers),
        }
    }

    /// Suspend until every window grants one admission.
    ///
    /// Each pass re-reads the clock and re-evaluates every tracker from
    /// scratch, so a slot another caller took during the wait is accounted
    /// for. No fairness order is promised among concurrent callers.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut trackers = self.trackers.lock().await;
                match Self::admit_all(&mut trackers, Instant::now()) {
                    None => return,
                    Some(wait) => wait,
                }
            };
            debug!(wait_ms = wait.as_millis() as u64, "Rate window full, waiting");
            sleep(wait).await;
        }
    }

    /// One admission pass without waiting.
    ///
    /// Returns `true` and charges every window if all of them have capacity,
    /// otherwise returns `false` and charges nothing.
    pub async fn try_acquire(&self) -> bool {
        let mut trackers = self.trackers.lock().await;
        Self::admit_all(&mut trackers, Instant::now()).is_none()
    }

    /// Check every tracker at `now` and commit all of them on unanimity.
    ///
    /// Returns `None` when the request was admitted, otherwise the longest
    /// delay reported by a refusing tracker. Sleeping that long guarantees
    /// the refusing trackers have all aged out at least one entry, which is
    /// what makes the retry loop in [`RateGovernor::acquire`] make progress.
    fn admit_all(trackers: &mut [QuotaTracker], now: Instant) -> Option<Duration> {
        let mut wait: Option<Duration> = None;
        for tracker in trackers.iter_mut() {
            if let Admission::Denied { retry_after } = tracker.check(now) {
                trace!(
                    window_ms = tracker.window().as_millis() as u64,
                    retry_after_ms = retry_after.as_millis() as u64,
                    "Window refused admission"
                );
                wait = Some(wait.map_or(retry_after, |current| current.max(retry_after)));
            }
        }
        if wait.is_none() {
            for tracker in trackers.iter_mut() {
                tracker.commit(now);
            }
        }
        wait
    }
}
