//! Error types for the voxel shell.

use thiserror::Error;

/// Shell error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog entry index out of range
    #[error("Catalog has no entry at index {index} ({len} entries)")]
    CatalogIndex { index: usize, len: usize },

    /// Model reference resolution error
    #[error("Resolution error: {0}")]
    Resolve(#[from] crate::model::resolver::ResolveError),

    /// Native library load error
    #[error("Library error: {0}")]
    Library(#[from] crate::engine::library::LibraryError),

    /// Render session error
    #[error("Session error: {0}")]
    Session(#[from] crate::engine::lifecycle::SessionError),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, Error>;
