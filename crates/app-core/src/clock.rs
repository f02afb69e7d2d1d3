use std::time::Duration;

use instant::Instant;

/// Monotonic frame timestamps measured from when the clock was created.
///
/// Works the same on native and in the browser, where `instant` is backed by
/// `performance.now()`.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    origin: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
