pub mod lint;
pub mod loader;
pub mod template;

pub use lint::{lint_template, TemplateWarning};
pub use loader::{
    load_and_instantiate, load_save_options_from_str, load_template_from_path,
    load_template_from_str, LoadError,
};
pub use template::{instantiate, MapTemplate, SideBinding, SolidTemplate};
