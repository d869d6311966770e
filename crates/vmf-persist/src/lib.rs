pub mod error;
pub mod format;
pub mod options;
pub mod save;
pub mod writer;

pub use error::PersistError;
pub use options::SaveOptions;
pub use save::{save_to_path, save_to_string, write_document, write_document_with};
