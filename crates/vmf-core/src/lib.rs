pub mod constants;
pub mod document;
pub mod editor;
pub mod error;
pub mod id;
pub mod side;
pub mod solid;
pub mod solid_list;
pub mod types;
pub mod version_info;
pub mod world;

pub use document::Document;
pub use editor::Editor;
pub use error::CoreError;
pub use id::IdAllocator;
pub use side::{Side, SideParams, TextureAxis};
pub use solid::Solid;
pub use solid_list::SolidList;
pub use types::{EntityId, Point3d, Point3i, Point4d};
pub use version_info::{VersionInfo, VersionInfoParams};
pub use world::{World, WorldParams};
