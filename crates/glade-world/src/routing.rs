//! Fan-out of registry lifecycle events to the panel and the audio queue.

use bevy_ecs::prelude::*;
use glade_ecs::SoundQueue;
use glade_scene::{RegistryEvent, SceneRegistry};

use crate::ControlPanel;

/// Hand each event to the panel, then request its sound.
pub fn dispatch_registry_events(
    events: &[RegistryEvent],
    panel: &mut ControlPanel,
    sounds: &mut SoundQueue,
) {
    for event in events {
        panel.apply(event);
        sounds.play(event.sound_cue());
    }
}

/// Drains pending registry events once per tick.
pub fn route_registry_events_system(
    mut registry: ResMut<'_, SceneRegistry>,
    mut panel: ResMut<'_, ControlPanel>,
    mut sounds: ResMut<'_, SoundQueue>,
) {
    if registry.pending_events() == 0 {
        return;
    }
    let events = registry.drain_events();
    dispatch_registry_events(&events, &mut panel, &mut sounds);
}
