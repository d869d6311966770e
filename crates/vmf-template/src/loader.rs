use std::path::{Path, PathBuf};

use ron::extensions::Extensions;
use thiserror::Error;
use vmf_core::{Document, IdAllocator};
use vmf_persist::SaveOptions;

use crate::lint::lint_template;
use crate::template::{instantiate, MapTemplate};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse map template RON: {0}")]
    TemplateParse(String),
    #[error("Failed to parse save options RON: {0}")]
    OptionsParse(String),
}

/// RON options shared by every loader. `IMPLICIT_SOME` lets optional
/// fields be written without `Some(..)`.
fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

/// Parse a map template from a RON string.
pub fn load_template_from_str(ron_str: &str) -> Result<MapTemplate, LoadError> {
    ron_options()
        .from_str(ron_str)
        .map_err(|e| LoadError::TemplateParse(e.to_string()))
}

/// Read and parse a map template file.
pub fn load_template_from_path(path: &Path) -> Result<MapTemplate, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let template = load_template_from_str(&contents)?;
    log::info!(
        "Loaded map template {} ({} solids)",
        path.display(),
        template.solids.len()
    );
    Ok(template)
}

/// Parse serializer options from a RON string.
pub fn load_save_options_from_str(ron_str: &str) -> Result<SaveOptions, LoadError> {
    ron_options()
        .from_str(ron_str)
        .map_err(|e| LoadError::OptionsParse(e.to_string()))
}

/// Parse a template, log any lint warnings, and build the document.
pub fn load_and_instantiate(ron_str: &str, ids: &IdAllocator) -> Result<Document, LoadError> {
    let template = load_template_from_str(ron_str)?;
    for warning in lint_template(&template) {
        log::warn!("Map template: {warning}");
    }
    Ok(instantiate(&template, ids))
}
