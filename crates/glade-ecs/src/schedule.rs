//! Tick stage labels and the ordered schedule runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, IntoSystemConfigs, ScheduleLabel};

use crate::TimeRes;

/// Labels for each stage of one host tick.
///
/// Stages run in the order listed, top to bottom, every tick.
#[derive(ScheduleLabel, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimStage {
    /// Clock advance.
    PreUpdate,
    /// Derived state, particles, and animation.
    Update,
    /// Event routing to the UI and audio boundaries.
    PostUpdate,
}

impl SimStage {
    /// All stages in execution order.
    pub const ALL: [SimStage; 3] = [SimStage::PreUpdate, SimStage::Update, SimStage::PostUpdate];
}

/// Ordered collection of [`Schedule`]s that drives one host tick.
///
/// Every stage uses the single-threaded executor: a tick runs to completion
/// on the caller's thread.
pub struct SimSchedules {
    schedules: Vec<(SimStage, Schedule)>,
}

impl SimSchedules {
    /// Create an empty set of stages.
    pub fn new() -> Self {
        let schedules = SimStage::ALL
            .into_iter()
            .map(|label| {
                let mut schedule = Schedule::new(label);
                schedule.set_executor_kind(ExecutorKind::SingleThreaded);
                (label, schedule)
            })
            .collect();

        Self { schedules }
    }

    /// Register a system (or chained system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: SimStage, system: impl IntoSystemConfigs<M>) {
        if let Some(schedule) = self.get_schedule_mut(stage) {
            schedule.add_systems(system);
        }
    }

    /// Run one tick: record `frame_dt` in [`TimeRes`], then every stage in order.
    pub fn run(&mut self, world: &mut World, frame_dt: f32) {
        world.get_resource_or_insert_with(TimeRes::default).advance(frame_dt);

        for (_label, schedule) in &mut self.schedules {
            schedule.run(world);
        }
    }

    /// Returns a mutable reference to the schedule for a given stage.
    pub fn get_schedule_mut(&mut self, stage: SimStage) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|(label, _)| *label == stage)
            .map(|(_, schedule)| schedule)
    }
}

impl Default for SimSchedules {
    fn default() -> Self {
        Self::new()
    }
}
