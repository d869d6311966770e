use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EDITOR_COLOR;
use crate::types::Point3i;

/// Hammer editor annotations attached to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Editor {
    /// RGB colour of the solid's wireframe. Not clamped.
    pub color: Point3i,
    pub visgroup_shown: bool,
    pub visgroup_auto_shown: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Point3i::from_array(DEFAULT_EDITOR_COLOR), true, true)
    }
}

impl Editor {
    pub fn new(color: Point3i, visgroup_shown: bool, visgroup_auto_shown: bool) -> Self {
        Self {
            color,
            visgroup_shown,
            visgroup_auto_shown,
        }
    }

    /// Build from integer flags; any nonzero value counts as set.
    pub fn from_flags(color: Point3i, visgroup_shown: i32, visgroup_auto_shown: i32) -> Self {
        Self::new(color, visgroup_shown != 0, visgroup_auto_shown != 0)
    }

    /// `visgroupshown` as written to the file (0 or 1).
    pub fn visgroup_shown_flag(&self) -> u8 {
        u8::from(self.visgroup_shown)
    }

    /// `visgroupautoshown` as written to the file (0 or 1).
    pub fn visgroup_auto_shown_flag(&self) -> u8 {
        u8::from(self.visgroup_auto_shown)
    }
}
