use std::path::PathBuf;

use vmf_persist::PersistError;

/// Errors raised by the benchmark harness.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("{0}")]
    Usage(String),

    #[error("serializing scene '{scene}' failed: {source}")]
    Serialize {
        scene: String,
        #[source]
        source: PersistError,
    },

    /// The same scene serialized to a different length on a later pass.
    #[error("scene '{scene}' serialized to {first} bytes, then {later} bytes")]
    UnstableOutput {
        scene: String,
        first: usize,
        later: usize,
    },

    #[error("failed to emit map: {0}")]
    Emit(#[from] PersistError),

    #[error("failed to read baseline {path}: {source}")]
    ReadBaseline {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("baseline {path} is not valid: {source}")]
    ParseBaseline {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write baseline {path}: {source}")]
    WriteBaseline {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
