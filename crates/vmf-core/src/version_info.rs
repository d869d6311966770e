use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::unset_if_legacy;

/// The `versioninfo` block at the top of every map. Describes the Hammer
/// environment the file targets. Carries no id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub editor_version: i32,
    pub editor_build: i32,
    /// Number of times the map has been saved.
    pub map_version: i32,
    pub format_version: i32,
    pub prefab: i32,
}

/// Construction arguments for `VersionInfo`. `None` selects the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionInfoParams {
    pub editor_version: Option<i32>,
    pub editor_build: Option<i32>,
    pub map_version: Option<i32>,
    pub format_version: Option<i32>,
    pub prefab: Option<i32>,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new(VersionInfoParams::default())
    }
}

impl VersionInfo {
    pub fn new(params: VersionInfoParams) -> Self {
        Self {
            editor_version: params.editor_version.unwrap_or(DEFAULT_EDITOR_VERSION),
            editor_build: params.editor_build.unwrap_or(DEFAULT_EDITOR_BUILD),
            map_version: params.map_version.unwrap_or(DEFAULT_MAP_VERSION),
            format_version: params.format_version.unwrap_or(DEFAULT_FORMAT_VERSION),
            prefab: params.prefab.unwrap_or(DEFAULT_PREFAB),
        }
    }

    /// Positional constructor where `-1` in any argument selects the default.
    pub fn from_legacy(
        editor_version: i32,
        editor_build: i32,
        map_version: i32,
        format_version: i32,
        prefab: i32,
    ) -> Self {
        Self::new(VersionInfoParams {
            editor_version: unset_if_legacy(editor_version),
            editor_build: unset_if_legacy(editor_build),
            map_version: unset_if_legacy(map_version),
            format_version: unset_if_legacy(format_version),
            prefab: unset_if_legacy(prefab),
        })
    }
}
