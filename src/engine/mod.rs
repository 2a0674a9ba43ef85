//! Hosting of the native rendering engine.
//!
//! This module provides:
//! - Render session lifecycle (`lifecycle`)
//! - Process-wide native library load state (`library`)
//! - Immersive window chrome (`chrome`)
//! - The engine interface (`native`)

pub mod chrome;
pub mod library;
pub mod lifecycle;
pub mod native;

pub use chrome::{BarsBehavior, ImmersiveMode, WindowChrome};
pub use library::{LibraryError, NativeLibrary, MAIN_LIBRARY};
pub use lifecycle::{RenderSession, SessionError, SessionState};
pub use native::NativeEngine;
