//! Admission bookkeeping for a single rolling window.

use crate::RateWindow;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Margin added to every denial delay so a caller that sleeps for the full
/// delay re-polls strictly after the oldest admission has left the window.
pub(crate) const RETRY_MARGIN: Duration = Duration::from_millis(10);

/// Outcome of one admission probe against a [`QuotaTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The request may proceed now.
    Admitted,
    /// The window is full. Retrying before `retry_after` has elapsed cannot
    /// succeed.
    Denied {
        /// Time until the oldest admission ages out, plus a small margin
        retry_after: Duration,
    },
}

impl Admission {
    /// Whether the probe admitted the request.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Records the instant of every admitted request inside one rolling window
/// and refuses admissions that would exceed the window's ceiling.
///
/// The tracker holds no clock of its own. Every operation takes `now` as an
/// argument, which keeps the arithmetic deterministic under test; callers
/// must supply non-decreasing instants. Expired entries are pruned lazily on
/// each probe, so memory never exceeds the window ceiling plus one probe.
#[derive(Debug)]
pub struct QuotaTracker {
    window: Duration,
    max_requests: usize,
    admissions: VecDeque<Instant>,
}

impl QuotaTracker {
    /// Create a tracker enforcing the given window.
    ///
    /// # Panics
    ///
    /// Panics if the window length or ceiling is zero.
    pub fn new(window: RateWindow) -> Self {
        assert!(window.is_valid(), "rate window must have nonzero length and ceiling");
        Self {
            window: window.duration(),
            max_requests: window.max_requests as usize,
            admissions: VecDeque::with_capacity(window.max_requests as usize),
        }
    }

    /// One admission attempt at `now`.
    ///
    /// Admitting records `now` in the log; a denial records nothing and
    /// reports how long the caller must wait before a retry can succeed.
    pub fn try_admit(&mut self, now: Instant) -> Admission {
        let admission = self.check(now);
        if admission.is_admitted() {
            self.commit(now);
        }
        admission
    }

    /// Evaluate capacity at `now` without consuming it.
    ///
    /// Split from [`QuotaTracker::commit`] so a caller coordinating several
    /// trackers can test all of them before charging any of them.
    pub(crate) fn check(&mut self, now: Instant) -> Admission {
        self.prune(now);
        if self.admissions.len() < self.max_requests {
            Admission::Admitted
        } else {
            // Full. The front entry is the next to age out.
            let retry_after = match self.admissions.front() {
                Some(oldest) => (*oldest + self.window).duration_since(now) + RETRY_MARGIN,
                None => RETRY_MARGIN,
            };
            Admission::Denied { retry_after }
        }
    }

    /// Record one admission at `now`. Only valid directly after a successful
    /// [`QuotaTracker::check`] at the same instant.
    pub(crate) fn commit(&mut self, now: Instant) {
        debug_assert!(self.admissions.len() < self.max_requests);
        self.admissions.push_back(now);
    }

    /// Drop admissions whose age has reached the window length.
    fn prune(&mut self, now: Instant) {
        while let Some(oldest) = self.admissions.front() {
            if now.duration_since(*oldest) >= self.window {
                self.admissions.pop_front();
            } else {
                break;
            }
        }
    }

    /// Number of admissions still inside the window as of `now`.
    pub fn admitted(&mut self, now: Instant) -> usize {
        self.prune(now);
        self.admissions.len()
    }

    /// The window length this tracker enforces.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// The admission ceiling this tracker enforces.
    pub fn capacity(&self) -> usize {
        self.max_requests
    }
}
