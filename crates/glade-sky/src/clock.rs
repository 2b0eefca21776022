//! Simulation clock.

use bevy_ecs::prelude::*;

/// Length of one simulated day in hours.
pub const HOURS_PER_DAY: f32 = 24.0;

/// Wrap any hour value into `[0, 24)`. Non-finite input maps to midnight.
pub fn wrap_hour(hour: f32) -> f32 {
    if !hour.is_finite() {
        return 0.0;
    }
    let wrapped = hour.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= HOURS_PER_DAY {
        0.0
    } else {
        wrapped
    }
}

/// Outcome of one [`SimClock::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockAdvance {
    /// Paused, zero speed, or zero delta: the hour did not change.
    Held,
    /// The hour moved forward within the same day.
    Advanced,
    /// The hour passed midnight.
    Wrapped,
}

/// The simulated hour of day and how fast it moves.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimClock {
    hour: f32,
    /// Multiplier on [`hours_per_second`](Self::hours_per_second). Zero stops the clock.
    pub speed_multiplier: f32,
    /// Whether the clock advances at all.
    pub playing: bool,
    /// Simulated hours per wall-clock second at speed 1.
    pub hours_per_second: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            hour: 12.0,
            speed_multiplier: 1.0,
            playing: true,
            hours_per_second: 0.1,
        }
    }
}

impl SimClock {
    /// Create a clock at `hour` (wrapped into `[0, 24)`).
    pub fn new(hour: f32, speed_multiplier: f32, playing: bool, hours_per_second: f32) -> Self {
        Self {
            hour: wrap_hour(hour),
            speed_multiplier: speed_multiplier.max(0.0),
            playing,
            hours_per_second,
        }
    }

    /// Current hour in `[0, 24)`.
    pub fn hour(&self) -> f32 {
        self.hour
    }

    /// Jump to `hour`, wrapped into `[0, 24)`.
    pub fn set_hour(&mut self, hour: f32) {
        self.hour = wrap_hour(hour);
    }

    /// Advance by a wall-clock delta: `hour += delta * speed_multiplier * hours_per_second`.
    pub fn advance(&mut self, delta_seconds: f32) -> ClockAdvance {
        if !self.playing || self.speed_multiplier <= 0.0 {
            return ClockAdvance::Held;
        }
        self.advance_hours(delta_seconds * self.speed_multiplier * self.hours_per_second)
    }

    /// Advance by an explicit number of simulated hours, ignoring speed and pause.
    pub fn advance_hours(&mut self, hours: f32) -> ClockAdvance {
        if !hours.is_finite() || hours <= 0.0 {
            return ClockAdvance::Held;
        }
        let raw = self.hour + hours;
        self.hour = wrap_hour(raw);
        if raw >= HOURS_PER_DAY {
            ClockAdvance::Wrapped
        } else {
            ClockAdvance::Advanced
        }
    }
}
