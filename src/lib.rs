//! voxel-shell - model acquisition and native engine bridge for the voxel viewer.

mod defaults;
pub mod error;

pub mod config;
pub mod engine;
pub mod ipc;
pub mod model;
pub mod surface;

pub use error::{Error, Result};

pub use config::ShellConfig;

pub use ipc::channel::{error_channel, ErrorReceiver, ErrorSender};
pub use ipc::intent::{ErrorReport, Extras, LaunchIntent, ACTION_VIEW, EXTRA_ERROR};
pub use ipc::serialization;

pub use engine::chrome::{BarsBehavior, ImmersiveMode, WindowChrome};
pub use engine::library::{LibraryError, NativeLibrary, MAIN_LIBRARY};
pub use engine::lifecycle::{RenderSession, SessionError, SessionState};
pub use engine::native::NativeEngine;

pub use model::catalog::{Choice, DocumentPicker, SessionLauncher, SourceSelector};
pub use model::resolver::{ModelResolver, ModelSource, ResolveError};
pub use model::store::{
    AssetStore, ContentResolver, DirectoryAssetStore, FileContentResolver, ModelStream,
};
pub use model::{ModelBytes, ModelReference, Scheme};

pub use surface::{ErrorScreen, ErrorSurface, UNKNOWN_ERROR};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
