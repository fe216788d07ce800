//! Timestamp sources

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of checkpoint timestamps
pub trait Clock {
    /// Current point in time
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Monotonic clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Readings are a fixed base instant plus an offset. The offset may be set
/// backwards, which lets callers reproduce a clock that steps back.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock reading its base instant
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `step`
    pub fn advance(&self, step: Duration) {
        self.offset.set(self.offset.get() + step);
    }

    /// Set the offset from the base instant
    pub fn set(&self, offset: Duration) {
        self.offset.set(offset);
    }

    /// Offset from the base instant
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

/// Signed nanoseconds from `earlier` to `later`.
///
/// Negative when `later` precedes `earlier`.
pub fn signed_nanos(earlier: Instant, later: Instant) -> i128 {
    match later.checked_duration_since(earlier) {
        Some(forward) => forward.as_nanos() as i128,
        None => -(earlier.duration_since(later).as_nanos() as i128),
    }
}
