//! Frame clock
//!
//! Wraps the host clock and hands out per-frame deltas. The delta is
//! clamped so a slow frame (tab switch, debugger pause) never turns into
//! a huge simulation jump.

use macroquad::prelude::get_time;

/// Maximum simulation step in seconds. Frames slower than this are
/// clamped rather than simulated in one jump.
pub const MAX_STEP: f32 = 0.05;

/// Tracks elapsed wall time between frames.
pub struct Timer {
    /// Timestamp of the previous tick, None until the first tick.
    last: Option<f64>,
}

impl Timer {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Elapsed seconds since the previous call, clamped to [`MAX_STEP`].
    /// The first call returns 0.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(get_time())
    }

    /// Same as [`tick`](Self::tick) but driven from an explicit timestamp.
    pub fn tick_at(&mut self, now: f64) -> f32 {
        let delta = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        delta.min(MAX_STEP)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
