//! Process-wide load state of the native engine library.
//!
//! The library is loaded at most once per process and never unloaded. The
//! first outcome, success or failure, is what every later caller sees.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Failed to load native library '{name}': {reason}")]
    LoadFailed { name: String, reason: String },

    #[error("Native library '{loaded}' already loaded, cannot load '{requested}'")]
    NameMismatch { loaded: String, requested: String },
}

pub type Result<T> = std::result::Result<T, LibraryError>;

struct LoadOutcome {
    name: String,
    result: std::result::Result<(), String>,
}

/// Load sentinel for one native library.
pub struct NativeLibrary {
    outcome: OnceLock<LoadOutcome>,
    attempts: AtomicU32,
}

/// The engine library of this process.
pub static MAIN_LIBRARY: NativeLibrary = NativeLibrary::new();

impl NativeLibrary {
    pub const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
            attempts: AtomicU32::new(0),
        }
    }

    /// Load `name` with `loader` unless a load already happened.
    ///
    /// Concurrent callers block until the first load finishes.
    pub fn ensure_loaded<F>(&self, name: &str, loader: F) -> Result<()>
    where
        F: FnOnce(&str) -> std::result::Result<(), String>,
    {
        let outcome = self.outcome.get_or_init(|| {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            log::info!("Loading native library '{}'", name);
            let result = loader(name);
            if let Err(ref reason) = result {
                log::error!("Native library '{}' failed to load: {}", name, reason);
            }
            LoadOutcome {
                name: name.to_string(),
                result,
            }
        });

        if outcome.name != name {
            return Err(LibraryError::NameMismatch {
                loaded: outcome.name.clone(),
                requested: name.to_string(),
            });
        }

        outcome
            .result
            .clone()
            .map_err(|reason| LibraryError::LoadFailed {
                name: outcome.name.clone(),
                reason,
            })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome.get(), Some(LoadOutcome { result: Ok(()), .. }))
    }

    /// Number of times a loader actually ran.
    pub fn load_attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for NativeLibrary {
    fn default() -> Self {
        Self::new()
    }
}
