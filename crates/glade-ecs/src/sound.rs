//! Audio boundary: named, fire-and-forget sound requests.
//!
//! The simulation never plays audio itself. It pushes [`SoundCue`]s into the
//! [`SoundQueue`] resource and the host drains them whenever it likes.

use bevy_ecs::prelude::*;

/// A named sound effect request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A light was added to the scene.
    AddLight,
    /// A light was removed from the scene.
    RemoveLight,
    /// An object was added to the scene.
    AddObject,
    /// An object was removed from the scene.
    RemoveObject,
    /// A bird was clicked.
    BirdCall,
    /// A frog was clicked.
    FrogCall,
}

impl SoundCue {
    /// Asset name the host audio layer resolves.
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::AddLight => "addLight",
            SoundCue::RemoveLight => "removeLight",
            SoundCue::AddObject => "addObject",
            SoundCue::RemoveObject => "removeObject",
            SoundCue::BirdCall => "birdCall",
            SoundCue::FrogCall => "frogCall",
        }
    }
}

/// Pending sound requests, in the order they were issued.
#[derive(Resource, Debug, Default)]
pub struct SoundQueue {
    pending: Vec<SoundCue>,
}

impl SoundQueue {
    /// Request a sound. Never blocks and never fails.
    pub fn play(&mut self, cue: SoundCue) {
        self.pending.push(cue);
    }

    /// Take every pending request, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.pending)
    }

    /// Pending requests without consuming them.
    pub fn pending(&self) -> &[SoundCue] {
        &self.pending
    }

    /// Returns the number of pending requests.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if there are no pending requests.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = SoundQueue::default();
        queue.play(SoundCue::AddLight);
        queue.play(SoundCue::FrogCall);
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained, vec![SoundCue::AddLight, SoundCue::FrogCall]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundCue::AddObject.name(), "addObject");
        assert_eq!(SoundCue::RemoveLight.name(), "removeLight");
        assert_eq!(SoundCue::BirdCall.name(), "birdCall");
    }
}
