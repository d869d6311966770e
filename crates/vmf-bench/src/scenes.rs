use glam::{DVec3, DVec4, IVec3};
use vmf_core::{
    Document, Editor, IdAllocator, Side, SideParams, Solid, TextureAxis, VersionInfo, World,
    WorldParams,
};

/// Edge length of every generated box, in Hammer units.
pub const BOX_SIZE: f64 = 64.0;

/// Gap between neighbouring boxes on the grid.
pub const BOX_SPACING: f64 = 128.0;

/// Boxes per grid row.
pub const GRID_WIDTH: usize = 64;

/// Texture scale used on every generated face.
const TEXTURE_SCALE: f64 = 0.25;

const MATERIALS: [&str; 4] = [
    "DEV/DEV_MEASUREGENERIC01B",
    "DEV/DEV_MEASUREWALL01A",
    "CONCRETE/CONCRETEFLOOR001A",
    "TOOLS/TOOLSNODRAW",
];

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub solid_count: usize,
}

/// Return the standard suite of benchmark scenes. "2.5K" crosses the
/// initial solid capacity of a world.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "1K",
            solid_count: 1_000,
        },
        SceneConfig {
            name: "2.5K",
            solid_count: 2_500,
        },
        SceneConfig {
            name: "10K",
            solid_count: 10_000,
        },
        SceneConfig {
            name: "50K",
            solid_count: 50_000,
        },
    ]
}

/// An axis-aligned box brush between `min` and `max`.
///
/// Slots 1..=6 hold top, bottom, left (-x), right (+x), back (+y) and
/// front (-y). Plane points follow Hammer's clockwise winding seen from
/// outside the brush.
pub fn box_solid(
    ids: &IdAllocator,
    min: DVec3,
    max: DVec3,
    material: &str,
    editor: Editor,
) -> Solid {
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);

    let u_x = TextureAxis::new(DVec4::new(1.0, 0.0, 0.0, 0.0), TEXTURE_SCALE);
    let u_y = TextureAxis::new(DVec4::new(0.0, 1.0, 0.0, 0.0), TEXTURE_SCALE);
    let v_neg_y = TextureAxis::new(DVec4::new(0.0, -1.0, 0.0, 0.0), TEXTURE_SCALE);
    let v_neg_z = TextureAxis::new(DVec4::new(0.0, 0.0, -1.0, 0.0), TEXTURE_SCALE);

    let faces = [
        (
            [
                DVec3::new(x0, y1, z1),
                DVec3::new(x1, y1, z1),
                DVec3::new(x1, y0, z1),
            ],
            u_x,
            v_neg_y,
        ),
        (
            [
                DVec3::new(x0, y0, z0),
                DVec3::new(x1, y0, z0),
                DVec3::new(x1, y1, z0),
            ],
            u_x,
            v_neg_y,
        ),
        (
            [
                DVec3::new(x0, y1, z1),
                DVec3::new(x0, y0, z1),
                DVec3::new(x0, y0, z0),
            ],
            u_y,
            v_neg_z,
        ),
        (
            [
                DVec3::new(x1, y1, z0),
                DVec3::new(x1, y0, z0),
                DVec3::new(x1, y0, z1),
            ],
            u_y,
            v_neg_z,
        ),
        (
            [
                DVec3::new(x1, y1, z1),
                DVec3::new(x0, y1, z1),
                DVec3::new(x0, y1, z0),
            ],
            u_x,
            v_neg_z,
        ),
        (
            [
                DVec3::new(x1, y0, z0),
                DVec3::new(x0, y0, z0),
                DVec3::new(x0, y0, z1),
            ],
            u_x,
            v_neg_z,
        ),
    ];

    let mut solid = Solid::new(ids, editor);
    for (slot, (plane, u_axis, v_axis)) in faces.into_iter().enumerate() {
        let side = Side::new(
            ids,
            SideParams {
                plane,
                material: Some(material.to_owned()),
                u_axis,
                v_axis,
                rotation: 0.0,
                lightmap_scale: None,
                smoothing_groups: 0,
            },
        );
        solid.bind_side(side, slot + 1);
    }
    solid
}

/// Build a document holding `solid_count` boxes laid out on a flat grid.
/// Materials and editor colours cycle deterministically.
pub fn build_scene(ids: &IdAllocator, solid_count: usize) -> Document {
    let mut world = World::new(ids, WorldParams::default());

    for i in 0..solid_count {
        let col = (i % GRID_WIDTH) as f64;
        let row = (i / GRID_WIDTH) as f64;
        let min = DVec3::new(col * BOX_SPACING, row * BOX_SPACING, 0.0);
        let max = min + DVec3::splat(BOX_SIZE);

        let shade = (i % 256) as i32;
        let editor = Editor::new(IVec3::new(shade, 180, 255 - shade), true, true);
        let material = MATERIALS[i % MATERIALS.len()];
        world.add_solid(box_solid(ids, min, max, material, editor));
    }

    Document::new(VersionInfo::default(), world)
}
