use serde::{Deserialize, Serialize};

/// Knobs for the serializer. The default output is the plain grammar with
/// no `editor` blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveOptions {
    /// Append an `editor` block after the six sides of each solid.
    pub emit_editor_blocks: bool,
}
