use std::time::Instant;

/// Monotonic milliseconds since controller start. Wraps at `u32::MAX`
/// (~49.7 days), so every elapsed-time comparison goes through [`elapsed`].
pub type Millis = u32;

/// Milliseconds from `since` to `now`, correct across a counter rollover.
pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// Wall clock for the driver loop: reports [`Millis`] since construction.
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Current tick time. Truncation to `u32` is the intended wraparound.
    pub fn now(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
