//! Model acquisition: references, byte sources, resolution and selection.

pub mod bytes;
pub mod catalog;
pub mod reference;
pub mod resolver;
pub mod store;

pub use bytes::ModelBytes;
pub use catalog::{Choice, DocumentPicker, SessionLauncher, SourceSelector};
pub use reference::{ModelReference, Scheme};
pub use resolver::{ModelResolver, ModelSource, ResolveError};
pub use store::{AssetStore, ContentResolver, DirectoryAssetStore, FileContentResolver, ModelStream};
