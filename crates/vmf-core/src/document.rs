use crate::id::IdAllocator;
use crate::version_info::VersionInfo;
use crate::world::World;

/// Root of a map: version metadata plus the one world.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version_info: VersionInfo,
    pub world: World,
}

impl Document {
    pub fn new(version_info: VersionInfo, world: World) -> Self {
        Self {
            version_info,
            world,
        }
    }

    /// Default version info and an empty default world (consumes one id).
    pub fn placeholder(ids: &IdAllocator) -> Self {
        Self::new(VersionInfo::default(), World::with_defaults(ids))
    }

    pub fn solid_count(&self) -> usize {
        self.world.solids().len()
    }
}
