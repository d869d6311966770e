use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::id::IdAllocator;
use crate::solid::Solid;
use crate::solid_list::SolidList;
use crate::types::{unset_if_legacy, EntityId};

/// The single `world` entity of a map, owning every solid.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub id: EntityId,
    pub map_version: i32,
    pub classname: String,
    /// Skybox name as Hammer knows it, e.g. "sky_day01_01".
    pub skyname: String,
    /// Written verbatim; -1 means "no limit" in the format itself.
    pub max_prop_screen_width: i32,
    pub detail_vbsp: String,
    pub detail_material: String,
    solids: SolidList,
}

/// Construction arguments for `World`. `None` selects the default.
/// `max_prop_screen_width` has no default substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    pub map_version: Option<i32>,
    pub classname: Option<String>,
    pub skyname: Option<String>,
    pub max_prop_screen_width: i32,
    pub detail_vbsp: Option<String>,
    pub detail_material: Option<String>,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            map_version: None,
            classname: None,
            skyname: None,
            max_prop_screen_width: UNLIMITED_PROP_SCREEN_WIDTH,
            detail_vbsp: None,
            detail_material: None,
        }
    }
}

impl WorldParams {
    /// Positional form: `-1` map version or `None` strings select defaults,
    /// `max_prop_screen_width` is kept as given (including -1).
    pub fn from_legacy(
        map_version: i32,
        classname: Option<&str>,
        skyname: Option<&str>,
        max_prop_screen_width: i32,
        detail_vbsp: Option<&str>,
        detail_material: Option<&str>,
    ) -> Self {
        Self {
            map_version: unset_if_legacy(map_version),
            classname: classname.map(str::to_owned),
            skyname: skyname.map(str::to_owned),
            max_prop_screen_width,
            detail_vbsp: detail_vbsp.map(str::to_owned),
            detail_material: detail_material.map(str::to_owned),
        }
    }
}

impl World {
    /// Build an empty world, consuming one id.
    pub fn new(ids: &IdAllocator, params: WorldParams) -> Self {
        Self {
            id: ids.next_id(),
            map_version: params.map_version.unwrap_or(DEFAULT_MAP_VERSION),
            classname: params
                .classname
                .unwrap_or_else(|| DEFAULT_CLASSNAME.to_owned()),
            skyname: params.skyname.unwrap_or_else(|| DEFAULT_SKYNAME.to_owned()),
            max_prop_screen_width: params.max_prop_screen_width,
            detail_vbsp: params
                .detail_vbsp
                .unwrap_or_else(|| DEFAULT_DETAIL_VBSP.to_owned()),
            detail_material: params
                .detail_material
                .unwrap_or_else(|| DEFAULT_DETAIL_MATERIAL.to_owned()),
            solids: SolidList::new(),
        }
    }

    /// An empty world with every field at its default.
    pub fn with_defaults(ids: &IdAllocator) -> Self {
        Self::new(ids, WorldParams::default())
    }

    /// Append a solid after all previously added solids.
    pub fn add_solid(&mut self, solid: Solid) {
        self.solids.push(solid);
    }

    pub fn solids(&self) -> &SolidList {
        &self.solids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;

    #[test]
    fn test_unset_strings_use_defaults() {
        let ids = IdAllocator::new();
        let world = World::new(&ids, WorldParams::from_legacy(-1, None, None, -1, None, None));
        assert_eq!(world.map_version, 1);
        assert_eq!(world.classname, "worldspawn");
        assert_eq!(world.skyname, "sky_day01_01");
        assert_eq!(world.detail_vbsp, "detail.vbsp");
        assert_eq!(world.detail_material, "detail/detailsprites");
    }

    #[test]
    fn test_max_prop_screen_width_is_never_substituted() {
        let ids = IdAllocator::new();
        let world = World::new(&ids, WorldParams::from_legacy(-1, None, None, -1, None, None));
        assert_eq!(world.max_prop_screen_width, -1);

        let world = World::new(&ids, WorldParams::from_legacy(-1, None, None, 0, None, None));
        assert_eq!(world.max_prop_screen_width, 0);
    }

    #[test]
    fn test_explicit_strings_pass_through() {
        let ids = IdAllocator::new();
        let params = WorldParams::from_legacy(
            3,
            Some("worldspawn"),
            Some("sky_wasteland02"),
            1280,
            Some("detail_2fort.vbsp"),
            Some("detail/detailsprites_2fort"),
        );
        let world = World::new(&ids, params);
        assert_eq!(world.map_version, 3);
        assert_eq!(world.skyname, "sky_wasteland02");
        assert_eq!(world.max_prop_screen_width, 1280);
        assert_eq!(world.detail_vbsp, "detail_2fort.vbsp");
        assert_eq!(world.detail_material, "detail/detailsprites_2fort");
    }

    #[test]
    fn test_add_solid_keeps_insertion_order() {
        let ids = IdAllocator::new();
        let mut world = World::with_defaults(&ids);
        assert_eq!(world.id, EntityId(1));

        let mut expected = Vec::new();
        for _ in 0..5 {
            let solid = Solid::new(&ids, Editor::default());
            expected.push(solid.id);
            world.add_solid(solid);
        }
        let actual: Vec<EntityId> = world.solids().iter().map(|s| s.id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_ids_interleave_across_entity_kinds() {
        let ids = IdAllocator::starting_at(100);
        let solid = Solid::new(&ids, Editor::default());
        let world = World::with_defaults(&ids);
        let side = crate::side::Side::placeholder(&ids);
        assert_eq!(solid.id, EntityId(100));
        assert_eq!(world.id, EntityId(101));
        assert_eq!(side.id, EntityId(102));
    }
}
