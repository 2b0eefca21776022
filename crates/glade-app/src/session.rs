//! Scripted headless session: a fixed sequence of host actions replayed over N frames.

use glade_creatures::Ray;
use glade_ecs::SoundCue;
use glade_scene::{LightKind, ShapeKind};
use glade_world::GladeWorld;
use glam::Vec3;
use tracing::{debug, info};

/// Where the scripted pointer clicks from.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 30.0);

/// One host action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptStep {
    /// Add a light at a random spot.
    AddLight(LightKind),
    /// Add an object at a random spot.
    AddObject(ShapeKind),
    /// Turn rain on or off.
    Rain(bool),
    /// Click from the camera toward the first creature.
    ClickCreature,
    /// Remove the oldest live light.
    RemoveOldestLight,
    /// Remove the oldest live object.
    RemoveOldestObject,
}

/// Actions keyed by the frame they run before.
#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    steps: Vec<(u32, ScriptStep)>,
}

impl Script {
    /// The default demo spread over `frames` frames.
    pub fn standard(frames: u32) -> Self {
        let at = |fraction: u32| frames * fraction / 8;
        Self {
            steps: vec![
                (0, ScriptStep::AddLight(LightKind::Point)),
                (0, ScriptStep::AddLight(LightKind::Spot)),
                (0, ScriptStep::AddObject(ShapeKind::Sphere)),
                (0, ScriptStep::AddObject(ShapeKind::Torus)),
                (at(2), ScriptStep::Rain(true)),
                (at(3), ScriptStep::ClickCreature),
                (at(5), ScriptStep::RemoveOldestLight),
                (at(6), ScriptStep::RemoveOldestObject),
                (at(7), ScriptStep::Rain(false)),
            ],
        }
    }

    /// Steps due before `frame`, in script order.
    pub fn due(&self, frame: u32) -> impl Iterator<Item = ScriptStep> + '_ {
        self.steps
            .iter()
            .filter(move |(at, _)| *at == frame)
            .map(|(_, step)| *step)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// What a session did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    /// Frames ticked.
    pub frames: u32,
    /// Script steps executed.
    pub steps: usize,
    /// Clicks that hit a creature.
    pub creature_hits: u32,
    /// Every sound requested, in order.
    pub sounds: Vec<SoundCue>,
}

/// Apply one step to the world. Returns whether a click hit a creature.
pub fn apply_step(world: &mut GladeWorld, step: ScriptStep) -> bool {
    match step {
        ScriptStep::AddLight(kind) => {
            world.create_light(kind, None);
        }
        ScriptStep::AddObject(shape) => {
            world.create_object(shape);
        }
        ScriptStep::Rain(enabled) => world.set_rain_enabled(enabled),
        ScriptStep::ClickCreature => {
            let target = world.creatures().iter().next().map(|c| c.position);
            if let Some(ray) = target.and_then(|t| Ray::toward(CAMERA_POSITION, t)) {
                return world.on_pointer_click(&ray);
            }
        }
        ScriptStep::RemoveOldestLight => {
            if let Some(id) = world.registry().light_ids().first().copied() {
                world.remove_light(id);
            }
        }
        ScriptStep::RemoveOldestObject => {
            if let Some(id) = world.registry().object_ids().first().copied() {
                world.remove_object(id);
            }
        }
    }
    false
}

/// Replay `script` over `frames` frames. `next_delta` supplies each frame's delta.
pub fn run_session(
    world: &mut GladeWorld,
    script: &Script,
    frames: u32,
    mut next_delta: impl FnMut() -> f32,
) -> SessionSummary {
    let mut summary = SessionSummary {
        frames,
        ..Default::default()
    };

    for frame in 0..frames {
        for step in script.due(frame) {
            debug!(frame, ?step, "script step");
            if apply_step(world, step) {
                summary.creature_hits += 1;
            }
            summary.steps += 1;
        }

        world.on_tick(next_delta());

        for cue in world.drain_sounds() {
            debug!(frame, sound = cue.name(), "play");
            summary.sounds.push(cue);
        }
    }

    info!(
        frames,
        steps = summary.steps,
        hits = summary.creature_hits,
        sounds = summary.sounds.len(),
        hour = world.clock().hour(),
        "session finished"
    );
    summary
}
