//! Typed, human-readable entry ids.

use std::fmt;

use crate::ArenaKey;

/// Id of a registered light. Displays as `light-<slot>.<generation>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(ArenaKey);

/// Id of a registered object. Displays as `object-<slot>.<generation>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(ArenaKey);

impl LightId {
    pub(crate) fn new(key: ArenaKey) -> Self {
        Self(key)
    }

    pub(crate) fn key(self) -> ArenaKey {
        self.0
    }
}

impl ObjectId {
    pub(crate) fn new(key: ArenaKey) -> Self {
        Self(key)
    }

    pub(crate) fn key(self) -> ArenaKey {
        self.0
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "light-{}.{}", self.0.index(), self.0.generation())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object-{}.{}", self.0.index(), self.0.generation())
    }
}
