use std::path::PathBuf;

/// Errors that can occur while writing a map.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to write map output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
