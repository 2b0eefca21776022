//! Optional once-per-simulated-hour lighting summary.

use bevy_ecs::prelude::*;
use glade_sky::{CelestialState, SimClock};
use tracing::info;

/// Tracks the last whole hour that was reported.
#[derive(Resource, Debug, Default)]
pub struct HourlyReport {
    /// Whether summaries are logged at all.
    pub enabled: bool,
    last_hour: Option<u32>,
}

impl HourlyReport {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_hour: None,
        }
    }

    /// Record `hour`; returns the whole hour if it differs from the last one seen.
    pub fn observe(&mut self, hour: f32) -> Option<u32> {
        let whole = hour.floor() as u32;
        if self.last_hour == Some(whole) {
            return None;
        }
        self.last_hour = Some(whole);
        Some(whole)
    }
}

/// Logs the lighting state whenever the simulated hour crosses an integer.
pub fn hourly_report_system(
    clock: Res<'_, SimClock>,
    state: Res<'_, CelestialState>,
    mut report: ResMut<'_, HourlyReport>,
) {
    if !report.enabled {
        return;
    }
    if let Some(hour) = report.observe(clock.hour()) {
        info!(
            hour,
            regime = ?state.regime,
            light = state.light_intensity,
            ambient = state.ambient_intensity,
            stars = state.star_opacity,
            "hour passed"
        );
    }
}
