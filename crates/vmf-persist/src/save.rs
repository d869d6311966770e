use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vmf_core::{Document, Editor, Side, Solid, VersionInfo, World};

use crate::error::PersistError;
use crate::format::*;
use crate::options::SaveOptions;
use crate::writer::BlockWriter;

/// Serialize a document in the plain VMF grammar (no editor blocks).
pub fn write_document<W: Write>(document: &Document, sink: &mut W) -> Result<(), PersistError> {
    write_document_with(document, SaveOptions::default(), sink)
}

/// Serialize a document, honouring `options`.
///
/// Layout: versioninfo block, then the world block with its scalars and
/// every solid in append order. Output is streamed; on error the sink may
/// hold a partial document.
pub fn write_document_with<W: Write>(
    document: &Document,
    options: SaveOptions,
    sink: &mut W,
) -> Result<(), PersistError> {
    let mut w = BlockWriter::new(sink);
    write_version_info(&mut w, &document.version_info)?;
    write_world(&mut w, &document.world, options)?;

    log::debug!(
        "Serialized world {} ({} solids, {} bytes)",
        document.world.id,
        document.world.solids().len(),
        w.bytes_written()
    );
    Ok(())
}

/// Serialize a document into a string.
pub fn save_to_string(document: &Document) -> Result<String, PersistError> {
    let mut out = Vec::new();
    write_document(document, &mut out)?;
    String::from_utf8(out)
        .map_err(|e| PersistError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Create (or truncate) `path` and write the document to it.
pub fn save_to_path(
    document: &Document,
    options: SaveOptions,
    path: &Path,
) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|source| PersistError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_document_with(document, options, &mut writer)?;
    writer.flush()?;

    log::info!(
        "Saved map with {} solids to {}",
        document.world.solids().len(),
        path.display()
    );
    Ok(())
}

fn write_version_info<W: Write>(
    w: &mut BlockWriter<'_, W>,
    info: &VersionInfo,
) -> Result<(), PersistError> {
    w.open(BLOCK_VERSIONINFO)?;
    w.field(KEY_EDITOR_VERSION, info.editor_version)?;
    w.field(KEY_EDITOR_BUILD, info.editor_build)?;
    w.field(KEY_MAP_VERSION, info.map_version)?;
    w.field(KEY_FORMAT_VERSION, info.format_version)?;
    w.field(KEY_PREFAB, info.prefab)?;
    w.close()
}

fn write_world<W: Write>(
    w: &mut BlockWriter<'_, W>,
    world: &World,
    options: SaveOptions,
) -> Result<(), PersistError> {
    w.open(BLOCK_WORLD)?;
    w.field(KEY_ID, world.id)?;
    w.field(KEY_MAP_VERSION, world.map_version)?;
    w.field(KEY_CLASSNAME, &world.classname)?;
    w.field(KEY_DETAIL_MATERIAL, &world.detail_material)?;
    w.field(KEY_DETAIL_VBSP, &world.detail_vbsp)?;
    w.field(KEY_MAX_PROP_SCREEN_WIDTH, world.max_prop_screen_width)?;
    w.field(KEY_SKYNAME, &world.skyname)?;
    for solid in world.solids() {
        write_solid(w, solid, options)?;
    }
    w.close()
}

fn write_solid<W: Write>(
    w: &mut BlockWriter<'_, W>,
    solid: &Solid,
    options: SaveOptions,
) -> Result<(), PersistError> {
    w.open(BLOCK_SOLID)?;
    w.field(KEY_ID, solid.id)?;
    for side in solid.sides() {
        write_side(w, side)?;
    }
    if options.emit_editor_blocks {
        write_editor(w, &solid.editor)?;
    }
    w.close()
}

fn write_side<W: Write>(w: &mut BlockWriter<'_, W>, side: &Side) -> Result<(), PersistError> {
    w.open(BLOCK_SIDE)?;
    w.field(KEY_ID, side.id)?;
    w.field(KEY_PLANE, PlaneText(&side.plane))?;
    w.field(KEY_MATERIAL, &side.material)?;
    w.field(KEY_UAXIS, AxisText(&side.u_axis))?;
    w.field(KEY_VAXIS, AxisText(&side.v_axis))?;
    w.field(KEY_ROTATION, Fixed(side.rotation))?;
    w.field(KEY_LIGHTMAP_SCALE, side.lightmap_scale)?;
    w.field(KEY_SMOOTHING_GROUPS, side.smoothing_groups)?;
    w.close()
}

fn write_editor<W: Write>(w: &mut BlockWriter<'_, W>, editor: &Editor) -> Result<(), PersistError> {
    w.open(BLOCK_EDITOR)?;
    w.field(KEY_COLOR, ColorText(editor.color))?;
    w.field(KEY_VISGROUP_SHOWN, editor.visgroup_shown_flag())?;
    w.field(KEY_VISGROUP_AUTO_SHOWN, editor.visgroup_auto_shown_flag())?;
    w.close()
}
