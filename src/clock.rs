//! Time sources for expiration checks
//!
//! Verification never reads wall time directly. A [`Clock`] is injected into the
//! verifier so that tests can pin "now" with a [`FrozenClock`].

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time in seconds
pub trait Clock {
    fn current_time(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_time(&self) -> i64 {
        (**self).current_time()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn current_time(&self) -> i64 {
        (**self).current_time()
    }
}

/// Wall clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_time(&self) -> i64 {
        // A clock set before 1970 reads as the epoch
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to
///
/// Clones share the same instant, so a test can keep one handle and hand
/// another to the verifier.
///
/// ```
/// use jwtverify::{Clock, FrozenClock};
///
/// let clock = FrozenClock::at(1_000);
/// let handle = clock.clone();
/// handle.advance(5);
/// assert_eq!(clock.current_time(), 1_005);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrozenClock {
    now: Arc<AtomicI64>,
}

impl FrozenClock {
    /// Clock frozen at `timestamp`
    pub fn at(timestamp: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(timestamp)),
        }
    }

    /// Clock frozen at the current wall time
    pub fn now() -> Self {
        Self::at(SystemClock.current_time())
    }

    /// Move the clock to `timestamp`
    pub fn freeze(&self, timestamp: i64) {
        self.now.store(timestamp, Ordering::SeqCst);
    }

    /// Move the clock forward by `seconds` (backward when negative)
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FrozenClock {
    fn current_time(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
