//! Per-species reactions to a click.
//!
//! Species map to a fixed strategy through [`behavior_for`]; creatures store
//! only their kind, never a callback.

use glade_ecs::SoundCue;
use glam::Vec3;
use rand::{Rng, RngCore};

use crate::{Creature, CreatureKind, Easing, Motion, Tween};

/// Lower corner of the volume birds fly within.
pub const FLIGHT_VOLUME_MIN: Vec3 = Vec3::new(-50.0, 10.0, -50.0);
/// Upper corner of the volume birds fly within.
pub const FLIGHT_VOLUME_MAX: Vec3 = Vec3::new(50.0, 30.0, 50.0);
/// Seconds a flight takes.
pub const FLIGHT_DURATION: f32 = 2.0;
/// Peak wing angle in radians.
pub const FLAP_ANGLE: f32 = 0.5;
/// Seconds per wing stroke.
pub const FLAP_DURATION: f32 = 0.2;
/// Strokes after the first; odd so the wings end folded.
pub const FLAP_REPEATS: u32 = 5;
/// Height of a frog hop.
pub const HOP_HEIGHT: f32 = 2.0;
/// Seconds for the way up; the way down takes as long.
pub const HOP_DURATION: f32 = 0.5;

/// How a species reacts when clicked.
pub trait CreatureBehavior: Sync {
    /// Sound requested on every click.
    fn call(&self) -> SoundCue;

    /// Motion to start at `now`, replacing whatever the creature was doing.
    fn react(&self, creature: &Creature, now: f64, rng: &mut dyn RngCore) -> Motion;
}

/// Flies to a random point in the flight volume while flapping.
pub struct BirdBehavior;

/// Hops once in place.
pub struct FrogBehavior;

impl CreatureBehavior for BirdBehavior {
    fn call(&self) -> SoundCue {
        SoundCue::BirdCall
    }

    fn react(&self, creature: &Creature, now: f64, rng: &mut dyn RngCore) -> Motion {
        let target = Vec3::new(
            rng.random_range(FLIGHT_VOLUME_MIN.x..=FLIGHT_VOLUME_MAX.x),
            rng.random_range(FLIGHT_VOLUME_MIN.y..=FLIGHT_VOLUME_MAX.y),
            rng.random_range(FLIGHT_VOLUME_MIN.z..=FLIGHT_VOLUME_MAX.z),
        );
        Motion::Flight {
            path: Tween::new(
                creature.position,
                target,
                now,
                FLIGHT_DURATION,
                Easing::QuadInOut,
            ),
            wings: Tween::new(0.0, FLAP_ANGLE, now, FLAP_DURATION, Easing::SineInOut)
                .yoyo(FLAP_REPEATS),
        }
    }
}

impl CreatureBehavior for FrogBehavior {
    fn call(&self) -> SoundCue {
        SoundCue::FrogCall
    }

    fn react(&self, creature: &Creature, now: f64, _rng: &mut dyn RngCore) -> Motion {
        let ground = creature.home().y;
        Motion::Hop {
            lift: Tween::new(ground, ground + HOP_HEIGHT, now, HOP_DURATION, Easing::BounceOut)
                .yoyo(1),
        }
    }
}

static BIRD: BirdBehavior = BirdBehavior;
static FROG: FrogBehavior = FrogBehavior;

/// Strategy for a species.
pub fn behavior_for(kind: CreatureKind) -> &'static dyn CreatureBehavior {
    match kind {
        CreatureKind::Bird => &BIRD,
        CreatureKind::Frog => &FROG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CreatureId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_table_maps_kind_to_call() {
        assert_eq!(behavior_for(CreatureKind::Bird).call(), SoundCue::BirdCall);
        assert_eq!(behavior_for(CreatureKind::Frog).call(), SoundCue::FrogCall);
    }

    #[test]
    fn test_bird_target_inside_flight_volume() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bird = Creature::new(CreatureId(0), CreatureKind::Bird, Vec3::new(0.0, 20.0, 0.0));
        for _ in 0..50 {
            let Motion::Flight { path, wings } = BIRD.react(&bird, 1.0, &mut rng) else {
                panic!("bird must fly");
            };
            assert_eq!(path.start, bird.position);
            assert!(path.end.cmpge(FLIGHT_VOLUME_MIN).all());
            assert!(path.end.cmple(FLIGHT_VOLUME_MAX).all());
            assert_eq!(wings.final_value(), 0.0);
        }
    }

    #[test]
    fn test_frog_hop_starts_from_home() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut frog = Creature::new(CreatureId(1), CreatureKind::Frog, Vec3::new(4.0, 1.0, 2.0));
        frog.position.y = 2.5;
        let Motion::Hop { lift } = FROG.react(&frog, 0.0, &mut rng) else {
            panic!("frog must hop");
        };
        assert_eq!(lift.start, 1.0);
        assert_eq!(lift.end, 3.0);
        assert_eq!(lift.final_value(), 1.0);
    }
}
