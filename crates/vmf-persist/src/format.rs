//! Grammar constants and value rendering for the VMF text format.
//!
//! Each value renderer is a `Display` wrapper so the writer can stream
//! fields without building intermediate strings.

use std::fmt;

use vmf_core::{Point3d, Point3i, TextureAxis};

/// One tab per nesting level.
pub const INDENT: char = '\t';

pub const BLOCK_VERSIONINFO: &str = "versioninfo";
pub const BLOCK_WORLD: &str = "world";
pub const BLOCK_SOLID: &str = "solid";
pub const BLOCK_SIDE: &str = "side";
pub const BLOCK_EDITOR: &str = "editor";

pub const KEY_EDITOR_VERSION: &str = "editorversion";
pub const KEY_EDITOR_BUILD: &str = "editorbuild";
pub const KEY_MAP_VERSION: &str = "mapversion";
pub const KEY_FORMAT_VERSION: &str = "formatversion";
pub const KEY_PREFAB: &str = "prefab";

pub const KEY_ID: &str = "id";
pub const KEY_CLASSNAME: &str = "classname";
pub const KEY_DETAIL_MATERIAL: &str = "detailmaterial";
pub const KEY_DETAIL_VBSP: &str = "detailvbsp";
pub const KEY_MAX_PROP_SCREEN_WIDTH: &str = "maxpropscreenwidth";
pub const KEY_SKYNAME: &str = "skyname";

pub const KEY_PLANE: &str = "plane";
pub const KEY_MATERIAL: &str = "material";
pub const KEY_UAXIS: &str = "uaxis";
pub const KEY_VAXIS: &str = "vaxis";
pub const KEY_ROTATION: &str = "rotation";
pub const KEY_LIGHTMAP_SCALE: &str = "lightmapscale";
pub const KEY_SMOOTHING_GROUPS: &str = "smoothing_groups";

pub const KEY_COLOR: &str = "color";
pub const KEY_VISGROUP_SHOWN: &str = "visgroupshown";
pub const KEY_VISGROUP_AUTO_SHOWN: &str = "visgroupautoshown";

/// Digits after the decimal point for every float field.
pub const FLOAT_PRECISION: usize = 6;

/// Fixed-point float with six decimals, spelled the way C's `%f` spells
/// non-finite values (`nan`, `inf`, `-inf`).
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" })
        } else if v.is_infinite() {
            f.write_str(if v < 0.0 { "-inf" } else { "inf" })
        } else {
            write!(f, "{:.*}", FLOAT_PRECISION, v)
        }
    }
}

/// `(x y z) (x y z) (x y z)`
#[derive(Debug, Clone, Copy)]
pub struct PlaneText<'a>(pub &'a [Point3d; 3]);

impl fmt::Display for PlaneText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "({} {} {})", Fixed(p.x), Fixed(p.y), Fixed(p.z))?;
        }
        Ok(())
    }
}

/// `[x y z w] scale`
#[derive(Debug, Clone, Copy)]
pub struct AxisText<'a>(pub &'a TextureAxis);

impl fmt::Display for AxisText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0.direction;
        write!(
            f,
            "[{} {} {} {}] {}",
            Fixed(d.x),
            Fixed(d.y),
            Fixed(d.z),
            Fixed(d.w),
            Fixed(self.0.scale)
        )
    }
}

/// `r g b`
#[derive(Debug, Clone, Copy)]
pub struct ColorText(pub Point3i);

impl fmt::Display for ColorText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec3, DVec4, IVec3};

    #[test]
    fn test_fixed_uses_six_decimals() {
        assert_eq!(Fixed(0.0).to_string(), "0.000000");
        assert_eq!(Fixed(0.25).to_string(), "0.250000");
        assert_eq!(Fixed(-64.0).to_string(), "-64.000000");
        assert_eq!(Fixed(1.0 / 3.0).to_string(), "0.333333");
        assert_eq!(Fixed(2.0 / 3.0).to_string(), "0.666667");
    }

    #[test]
    fn test_fixed_large_magnitudes_stay_fixed_point() {
        assert_eq!(Fixed(1.0e10).to_string(), "10000000000.000000");
        assert_eq!(Fixed(1.0e-9).to_string(), "0.000000");
    }

    #[test]
    fn test_fixed_non_finite_and_negative_zero() {
        assert_eq!(Fixed(-0.0).to_string(), "-0.000000");
        assert_eq!(Fixed(f64::NAN).to_string(), "nan");
        assert_eq!(Fixed(f64::INFINITY).to_string(), "inf");
        assert_eq!(Fixed(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_plane_text() {
        let plane = [
            DVec3::new(-64.0, 64.0, 64.0),
            DVec3::new(64.0, 64.0, 64.0),
            DVec3::new(64.0, -64.0, 64.0),
        ];
        assert_eq!(
            PlaneText(&plane).to_string(),
            "(-64.000000 64.000000 64.000000) (64.000000 64.000000 64.000000) \
             (64.000000 -64.000000 64.000000)"
        );
    }

    #[test]
    fn test_axis_text() {
        let axis = TextureAxis::new(DVec4::new(1.0, 0.0, 0.0, 16.0), 0.25);
        assert_eq!(
            AxisText(&axis).to_string(),
            "[1.000000 0.000000 0.000000 16.000000] 0.250000"
        );
    }

    #[test]
    fn test_color_text_is_unclamped_integers() {
        assert_eq!(ColorText(IVec3::new(0, 180, -1)).to_string(), "0 180 -1");
    }
}
