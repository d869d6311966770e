use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::id::IdAllocator;
use crate::types::{unset_if_legacy, EntityId, Point3d, Point4d};

/// One texture axis of a side: direction and offset, plus texels-per-unit scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureAxis {
    pub direction: Point4d,
    pub scale: f64,
}

impl TextureAxis {
    pub fn new(direction: Point4d, scale: f64) -> Self {
        Self { direction, scale }
    }
}

/// One planar face of a solid.
///
/// `Side::default()` is the unbound slot value: id 0, zero geometry and an
/// empty material. It consumes no id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Side {
    pub id: EntityId,
    /// Three points spanning the face plane, in Hammer winding order.
    pub plane: [Point3d; 3],
    pub material: String,
    pub u_axis: TextureAxis,
    pub v_axis: TextureAxis,
    pub rotation: f64,
    pub lightmap_scale: i32,
    pub smoothing_groups: i32,
}

/// Construction arguments for `Side`.
///
/// Only `material` and `lightmap_scale` have defaults. Axis scales,
/// rotation and smoothing groups are taken as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideParams {
    pub plane: [Point3d; 3],
    pub material: Option<String>,
    pub u_axis: TextureAxis,
    pub v_axis: TextureAxis,
    pub rotation: f64,
    pub lightmap_scale: Option<i32>,
    pub smoothing_groups: i32,
}

impl SideParams {
    /// Positional form where a `None` material or a `-1` lightmap scale
    /// selects the default.
    pub fn from_legacy(
        plane: [Point3d; 3],
        material: Option<&str>,
        u_axis: TextureAxis,
        v_axis: TextureAxis,
        rotation: f64,
        lightmap_scale: i32,
        smoothing_groups: i32,
    ) -> Self {
        Self {
            plane,
            material: material.map(str::to_owned),
            u_axis,
            v_axis,
            rotation,
            lightmap_scale: unset_if_legacy(lightmap_scale),
            smoothing_groups,
        }
    }
}

impl Side {
    /// Build a side, consuming one id.
    pub fn new(ids: &IdAllocator, params: SideParams) -> Self {
        Self {
            id: ids.next_id(),
            plane: params.plane,
            material: params
                .material
                .unwrap_or_else(|| DEFAULT_SIDE_MATERIAL.to_owned()),
            u_axis: params.u_axis,
            v_axis: params.v_axis,
            rotation: params.rotation,
            lightmap_scale: params.lightmap_scale.unwrap_or(DEFAULT_LIGHTMAP_SCALE),
            smoothing_groups: params.smoothing_groups,
        }
    }

    /// A textured side with a degenerate plane, consuming one id. Brick
    /// floor material with Hammer's standard axes.
    pub fn placeholder(ids: &IdAllocator) -> Self {
        Self {
            id: ids.next_id(),
            plane: [Point3d::ZERO; 3],
            material: PLACEHOLDER_SIDE_MATERIAL.to_owned(),
            u_axis: TextureAxis::new(Point4d::new(1.0, 0.0, 0.0, 0.0), PLACEHOLDER_AXIS_SCALE),
            v_axis: TextureAxis::new(Point4d::new(0.0, 0.0, -1.0, 0.0), PLACEHOLDER_AXIS_SCALE),
            rotation: 0.0,
            lightmap_scale: DEFAULT_LIGHTMAP_SCALE,
            smoothing_groups: 0,
        }
    }

    /// Whether this is an unbound slot value rather than a constructed side.
    pub fn is_unbound(&self) -> bool {
        self.id.is_unbound()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec3, DVec4};

    fn floor_params() -> SideParams {
        SideParams {
            plane: [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 64.0, 0.0),
                DVec3::new(64.0, 64.0, 0.0),
            ],
            material: None,
            u_axis: TextureAxis::new(DVec4::new(1.0, 0.0, 0.0, 0.0), 0.25),
            v_axis: TextureAxis::new(DVec4::new(0.0, -1.0, 0.0, 0.0), 0.25),
            rotation: 0.0,
            lightmap_scale: None,
            smoothing_groups: 0,
        }
    }

    #[test]
    fn test_unset_material_and_lightmap_scale_default() {
        let ids = IdAllocator::new();
        let side = Side::new(&ids, floor_params());
        assert_eq!(side.material, "PLASTIC/PLASTICWALL001A");
        assert_eq!(side.lightmap_scale, 16);
    }

    #[test]
    fn test_undefaulted_fields_pass_through() {
        let ids = IdAllocator::new();
        let params = SideParams {
            u_axis: TextureAxis::new(DVec4::new(1.0, 0.0, 0.0, 8.0), 0.0),
            rotation: -1.0,
            smoothing_groups: -1,
            ..floor_params()
        };
        let side = Side::new(&ids, params);
        assert_eq!(side.u_axis.scale, 0.0);
        assert_eq!(side.u_axis.direction.w, 8.0);
        assert_eq!(side.rotation, -1.0);
        assert_eq!(side.smoothing_groups, -1);
    }

    #[test]
    fn test_legacy_sentinels() {
        let base = floor_params();
        let params =
            SideParams::from_legacy(base.plane, None, base.u_axis, base.v_axis, 0.0, -1, 0);
        assert_eq!(params.material, None);
        assert_eq!(params.lightmap_scale, None);

        let params = SideParams::from_legacy(
            base.plane,
            Some("TOOLS/TOOLSNODRAW"),
            base.u_axis,
            base.v_axis,
            0.0,
            32,
            0,
        );
        let side = Side::new(&IdAllocator::new(), params);
        assert_eq!(side.material, "TOOLS/TOOLSNODRAW");
        assert_eq!(side.lightmap_scale, 32);
    }

    #[test]
    fn test_each_side_consumes_one_id() {
        let ids = IdAllocator::new();
        let a = Side::new(&ids, floor_params());
        let b = Side::placeholder(&ids);
        let c = Side::new(&ids, floor_params());
        assert_eq!((a.id, b.id, c.id), (EntityId(1), EntityId(2), EntityId(3)));
    }

    #[test]
    fn test_default_side_is_unbound_and_consumes_nothing() {
        let ids = IdAllocator::new();
        let side = Side::default();
        assert!(side.is_unbound());
        assert!(side.material.is_empty());
        assert_eq!(ids.peek(), EntityId(1));
    }

    #[test]
    fn test_placeholder_side_values() {
        let side = Side::placeholder(&IdAllocator::new());
        assert_eq!(side.material, "BRICK/BRICKFLOOR001A");
        assert_eq!(side.u_axis, TextureAxis::new(DVec4::X, 0.25));
        assert_eq!(side.v_axis, TextureAxis::new(DVec4::new(0.0, 0.0, -1.0, 0.0), 0.25));
        assert_eq!(side.lightmap_scale, 16);
    }
}
