use std::time::Duration;

use crate::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Pending,
    Running { started: Duration },
    Finished,
}

/// Scalar tween. The clock starts at the first timestamp fed to `update`.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    phase: Phase,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            phase: Phase::Pending,
        }
    }

    /// True until the update that reaches the end value has run.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase != Phase::Finished
    }

    /// Stop without emitting further values.
    #[inline]
    pub fn stop(&mut self) {
        self.phase = Phase::Finished;
    }

    /// Advance to `now` and return the interpolated value, or `None` once finished.
    ///
    /// The update that crosses the duration returns exactly `to` and finishes
    /// the tween. Timestamps before the start are treated as the start.
    pub fn update(&mut self, now: Duration) -> Option<f32> {
        let started = match self.phase {
            Phase::Finished => return None,
            Phase::Pending => {
                self.phase = Phase::Running { started: now };
                now
            }
            Phase::Running { started } => started,
        };
        let elapsed = now.saturating_sub(started);
        if elapsed >= self.duration {
            self.phase = Phase::Finished;
            return Some(self.to);
        }
        let k = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(k);
        Some(self.from + (self.to - self.from) * eased)
    }
}
