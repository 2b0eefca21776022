//! Creature state and the motions that animate it.

use std::fmt;

use glam::Vec3;

use crate::{BoundingSphere, Tween};

/// Creature species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CreatureKind {
    /// Flies to a new spot when clicked.
    Bird,
    /// Hops in place when clicked.
    Frog,
}

impl CreatureKind {
    /// Radius of the hit proxy.
    pub fn proxy_radius(self) -> f32 {
        match self {
            CreatureKind::Bird => 1.5,
            CreatureKind::Frog => 0.8,
        }
    }
}

/// Index of a creature in its [`Creatures`](crate::Creatures) set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatureId(pub(crate) u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creature-{}", self.0)
    }
}

/// A scheduled animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Bird flight to a new target with flapping wings.
    Flight {
        /// Body position over time.
        path: Tween<Vec3>,
        /// Wing angle over time.
        wings: Tween<f32>,
    },
    /// Frog hop straight up and back down.
    Hop {
        /// Body elevation over time.
        lift: Tween<f32>,
    },
}

impl Motion {
    /// Whether every tween in the motion is over at `now`.
    pub fn is_finished(&self, now: f64) -> bool {
        match self {
            Motion::Flight { path, wings } => path.is_finished(now) && wings.is_finished(now),
            Motion::Hop { lift } => lift.is_finished(now),
        }
    }
}

/// Whether a creature is animating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    /// At rest.
    #[default]
    Idle,
    /// Playing a motion.
    Moving(Motion),
}

/// One clickable creature.
#[derive(Clone, Debug, PartialEq)]
pub struct Creature {
    id: CreatureId,
    kind: CreatureKind,
    home: Vec3,
    /// Current body position.
    pub position: Vec3,
    /// Current wing angle in radians; always 0 for frogs.
    pub wing_angle: f32,
    /// Current animation.
    pub animation: AnimationState,
}

impl Creature {
    pub(crate) fn new(id: CreatureId, kind: CreatureKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            home: position,
            position,
            wing_angle: 0.0,
            animation: AnimationState::Idle,
        }
    }

    /// Stable id.
    pub fn id(&self) -> CreatureId {
        self.id
    }

    /// Species.
    pub fn kind(&self) -> CreatureKind {
        self.kind
    }

    /// Spawn position; frogs always hop from here.
    pub fn home(&self) -> Vec3 {
        self.home
    }

    /// Hit proxy around the current position.
    pub fn proxy(&self) -> BoundingSphere {
        BoundingSphere {
            center: self.position,
            radius: self.kind.proxy_radius(),
        }
    }

    /// Whether a motion is playing.
    pub fn is_moving(&self) -> bool {
        matches!(self.animation, AnimationState::Moving(_))
    }

    /// Replace whatever is playing with `motion`.
    pub fn start(&mut self, motion: Motion) {
        self.animation = AnimationState::Moving(motion);
    }

    /// Pose the creature at `now`; returns to idle once the motion completes.
    pub fn animate(&mut self, now: f64) {
        let AnimationState::Moving(motion) = self.animation else {
            return;
        };
        match motion {
            Motion::Flight { path, wings } => {
                self.position = path.sample(now);
                self.wing_angle = wings.sample(now);
            }
            Motion::Hop { lift } => {
                self.position.y = lift.sample(now);
            }
        }
        if motion.is_finished(now) {
            self.animation = AnimationState::Idle;
        }
    }
}
