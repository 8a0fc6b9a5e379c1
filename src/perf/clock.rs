//! Timestamp sources for the timed phases.

use std::time::{Duration, Instant};

/// A source of monotonic timestamps.
pub trait Clock: std::fmt::Debug {
    /// Current instant.
    fn now(&self) -> Instant;

    /// Time elapsed since `start`, according to this clock.
    fn since(&self, start: Instant) -> Duration {
        self.now().saturating_duration_since(start)
    }
}

/// The system monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Measure wall-clock time for a synchronous operation.
pub fn measure<C, F, R>(clock: &C, f: F) -> (R, Duration)
where
    C: Clock + ?Sized,
    F: FnOnce() -> R,
{
    let start = clock.now();
    let result = f();
    let elapsed = clock.since(start);
    (result, elapsed)
}
