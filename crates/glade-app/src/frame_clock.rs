//! Variable-rate frame clock.
//!
//! Measures wall-clock time between frames and hands the simulation that delta
//! directly. Oversized deltas (a stalled process, a debugger break) are clamped
//! so a single tick cannot skip hours of simulated weather.

use std::time::Instant;
use tracing::warn;

/// Target frame interval for the headless host: 60 Hz.
pub const TARGET_FRAME_TIME: f64 = 1.0 / 60.0;

/// Largest delta ever passed to the simulation.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Frame timing state.
pub struct FrameClock {
    previous_time: Instant,
    total_time: f64,
    frame_count: u64,
    clamped_count: u64,
}

impl FrameClock {
    /// Creates a clock starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            total_time: 0.0,
            frame_count: 0,
            clamped_count: 0,
        }
    }

    /// Measures the time since the previous call and returns the clamped delta.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time)
    }

    /// Records a frame of `frame_time` seconds and returns the delta to simulate.
    pub fn advance(&mut self, frame_time: f64) -> f32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
            self.clamped_count += 1;
        }
        self.total_time += frame_time;
        self.frame_count += 1;
        frame_time as f32
    }

    /// Time left in the current frame to hit [`TARGET_FRAME_TIME`].
    pub fn remaining_in_frame(&self) -> f64 {
        let spent = self.previous_time.elapsed().as_secs_f64();
        (TARGET_FRAME_TIME - spent).max(0.0)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulated seconds handed out so far.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Frames whose delta had to be clamped.
    pub fn clamped_count(&self) -> u64 {
        self.clamped_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
