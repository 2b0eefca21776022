//! Registry lifecycle events.

use glade_ecs::SoundCue;

use crate::{LightId, LightKind, ObjectId, ShapeKind};

/// Something was added to or removed from the registry.
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryEvent {
    /// A light and its helper went live.
    LightAdded {
        /// New id.
        id: LightId,
        /// Light type.
        kind: LightKind,
        /// Display name.
        name: String,
    },
    /// A light and its helper were dropped.
    LightRemoved {
        /// Removed id.
        id: LightId,
        /// Light type.
        kind: LightKind,
        /// Display name.
        name: String,
    },
    /// An object went live.
    ObjectAdded {
        /// New id.
        id: ObjectId,
        /// Shape.
        shape: ShapeKind,
        /// Display name.
        name: String,
    },
    /// An object was dropped.
    ObjectRemoved {
        /// Removed id.
        id: ObjectId,
        /// Shape.
        shape: ShapeKind,
        /// Display name.
        name: String,
    },
}

impl RegistryEvent {
    /// Sound the audio boundary should play for this event.
    pub fn sound_cue(&self) -> SoundCue {
        match self {
            RegistryEvent::LightAdded { .. } => SoundCue::AddLight,
            RegistryEvent::LightRemoved { .. } => SoundCue::RemoveLight,
            RegistryEvent::ObjectAdded { .. } => SoundCue::AddObject,
            RegistryEvent::ObjectRemoved { .. } => SoundCue::RemoveObject,
        }
    }
}
