//! Single source of truth for the default table and fixed format sizes.
//! Constructors resolve unset fields against these values; the serializer
//! never substitutes anything itself.

/// Number of side slots in every solid.
pub const SIDES_PER_SOLID: usize = 6;

/// First identifier handed out by a fresh allocator.
pub const FIRST_ENTITY_ID: u32 = 1;

/// Identifier carried by side slots that were never bound.
pub const UNBOUND_ENTITY_ID: u32 = 0;

/// Integer value legacy callers pass to request a default.
pub const LEGACY_UNSET: i32 = -1;

/// Hammer editor version the output claims compatibility with.
pub const DEFAULT_EDITOR_VERSION: i32 = 400;

/// Hammer editor build the output claims compatibility with.
pub const DEFAULT_EDITOR_BUILD: i32 = 5439;

/// Number of times the map has been saved.
pub const DEFAULT_MAP_VERSION: i32 = 1;

pub const DEFAULT_FORMAT_VERSION: i32 = 100;

pub const DEFAULT_PREFAB: i32 = 0;

pub const DEFAULT_CLASSNAME: &str = "worldspawn";

pub const DEFAULT_SKYNAME: &str = "sky_day01_01";

/// Not a substitution default: the format itself reads -1 as "no limit".
/// Only used when a world is built entirely from defaults.
pub const UNLIMITED_PROP_SCREEN_WIDTH: i32 = -1;

pub const DEFAULT_DETAIL_VBSP: &str = "detail.vbsp";

pub const DEFAULT_DETAIL_MATERIAL: &str = "detail/detailsprites";

/// Material given to a side constructed without one.
pub const DEFAULT_SIDE_MATERIAL: &str = "PLASTIC/PLASTICWALL001A";

pub const DEFAULT_LIGHTMAP_SCALE: i32 = 16;

/// Material of placeholder sides created by `Side::placeholder`.
pub const PLACEHOLDER_SIDE_MATERIAL: &str = "BRICK/BRICKFLOOR001A";

/// Texture scale of placeholder side axes (Hammer's default 0.25 units/texel).
pub const PLACEHOLDER_AXIS_SCALE: f64 = 0.25;

/// Grey used by Hammer for solids with no explicit editor colour.
pub const DEFAULT_EDITOR_COLOR: [i32; 3] = [127, 127, 127];

/// Solids reserved on a world's first append.
pub const INITIAL_SOLID_CAPACITY: usize = 2048;

/// Later growth adds capacity / SOLID_GROWTH_DIVISOR (a 1.5x factor).
pub const SOLID_GROWTH_DIVISOR: usize = 2;
