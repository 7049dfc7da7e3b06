//! Time management utilities

use std::time::Instant;

/// Monotonic clock measuring time since renderer creation
///
/// Supplies the per-frame timestamp uploaded to shaders as `u_time`.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a new clock at the current instant
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was started
    pub fn elapsed_seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Restart the clock
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}
