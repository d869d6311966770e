use std::fmt;

use glam::{DVec3, DVec4, IVec3};
use serde::{Deserialize, Serialize};

use crate::constants::UNBOUND_ENTITY_ID;

/// Integer triple, used for editor colours. No range clamping.
pub type Point3i = IVec3;

/// Spatial coordinate in Hammer units.
pub type Point3d = DVec3;

/// Texture axis direction (xyz) plus offset (w).
pub type Point4d = DVec4;

/// Identifier issued by an `IdAllocator`. Unique across worlds, solids and
/// sides built from the same allocator. 0 = never allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Id carried by side slots that were never bound.
    pub const UNBOUND: EntityId = EntityId(UNBOUND_ENTITY_ID);

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_unbound(self) -> bool {
        self == Self::UNBOUND
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::UNBOUND
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a legacy `-1` integer argument to "unset".
pub fn unset_if_legacy(value: i32) -> Option<i32> {
    if value == crate::constants::LEGACY_UNSET {
        None
    } else {
        Some(value)
    }
}
