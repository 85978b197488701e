use std::thread;
use std::time::Duration;

/// Scales the simulated work delays of the demos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    scale: f64,
}

impl Pace {
    /// Negative or NaN scales are treated as zero.
    pub fn new(scale: f64) -> Self {
        Self {
            scale: scale.max(0.0),
        }
    }

    /// Never sleeps.
    #[cfg(test)]
    pub fn instant() -> Self {
        Self { scale: 0.0 }
    }

    /// Saturates at `Duration::MAX` for scales too large to represent.
    pub fn delay(&self, millis: u64) -> Duration {
        Duration::try_from_secs_f64(millis as f64 / 1000.0 * self.scale).unwrap_or(Duration::MAX)
    }

    pub fn sleep(&self, millis: u64) {
        let delay = self.delay(millis);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
