use thiserror::Error;

/// Errors raised while building the map model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("entity identifier space exhausted (last issued {0})")]
    IdsExhausted(u32),
}
