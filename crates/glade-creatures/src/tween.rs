//! Time-bounded interpolation records.
//!
//! A [`Tween`] holds everything needed to evaluate it, so its value is a pure
//! function of the time it is sampled at. Nothing schedules it; the owner
//! samples it each tick and drops it once [`Tween::is_finished`].

use glam::Vec3;

use crate::Easing;

/// Values a tween can interpolate.
pub trait Interpolate: Copy {
    /// Linear blend, `t = 0` gives `self`, `t = 1` gives `other`.
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// Interpolates `start → end` over `duration` seconds beginning at `start_time`,
/// played `repeat + 1` times. With `yoyo`, every odd play runs backwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value at progress 0.
    pub start: T,
    /// Value at progress 1.
    pub end: T,
    /// Simulation time the first play begins, in seconds.
    pub start_time: f64,
    /// Length of one play in seconds.
    pub duration: f32,
    /// Curve applied to each play.
    pub easing: Easing,
    /// Extra plays after the first.
    pub repeat: u32,
    /// Alternate direction on each repeat.
    pub yoyo: bool,
}

impl<T: Interpolate> Tween<T> {
    /// A single forward play.
    pub fn new(start: T, end: T, start_time: f64, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            start_time,
            duration,
            easing,
            repeat: 0,
            yoyo: false,
        }
    }

    /// Play `repeat` more times, reversing on every other play.
    pub fn yoyo(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self.yoyo = true;
        self
    }

    /// Time from the first play's start to the last play's end.
    pub fn total_duration(&self) -> f64 {
        f64::from(self.duration.max(0.0)) * f64::from(self.repeat + 1)
    }

    /// Whether every play is over at `now`.
    pub fn is_finished(&self, now: f64) -> bool {
        now - self.start_time >= self.total_duration()
    }

    /// Value once every play has completed.
    pub fn final_value(&self) -> T {
        if self.yoyo && self.repeat % 2 == 1 {
            self.start
        } else {
            self.end
        }
    }

    /// Value at simulation time `now`. Before `start_time` this is `start`.
    pub fn sample(&self, now: f64) -> T {
        let elapsed = (now - self.start_time).max(0.0);
        if self.duration <= 0.0 || elapsed >= self.total_duration() {
            return self.final_value();
        }

        let duration = f64::from(self.duration);
        let play = (elapsed / duration).floor();
        let local = ((elapsed - play * duration) / duration) as f32;
        let reversed = self.yoyo && (play as u64) % 2 == 1;
        let progress = if reversed { 1.0 - local } else { local };

        self.start.interpolate(self.end, self.easing.apply(progress))
    }
}
