//! Platform byte sources: the bundled-asset store and the content resolver.
//!
//! Both are traits so hosts can plug in the platform facilities (an asset
//! manager, a content provider). The filesystem-backed implementations here
//! serve desktop hosts and tests.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::model::reference::uri_scheme;

/// A readable stream owned by the caller; dropping it closes it.
pub type ModelStream = Box<dyn Read + Send>;

/// Store of assets packaged with the application.
pub trait AssetStore: Send + Sync {
    /// Entry names of `dir`, in listing order.
    fn list(&self, dir: &str) -> io::Result<Vec<String>>;

    /// Open the asset at `path`, relative to the store root.
    fn open(&self, path: &str) -> io::Result<ModelStream>;
}

/// Generic resolution of arbitrary locators into byte streams.
pub trait ContentResolver: Send + Sync {
    fn open(&self, locator: &str) -> io::Result<ModelStream>;
}

/// Asset store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryAssetStore {
    root: PathBuf,
}

impl DirectoryAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `path` onto the root, refusing anything that escapes it.
    fn asset_path(&self, path: &str) -> io::Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("asset path '{}' leaves the asset store", path),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetStore for DirectoryAssetStore {
    fn list(&self, dir: &str) -> io::Result<Vec<String>> {
        let dir = self.asset_path(dir)?;
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }

    fn open(&self, path: &str) -> io::Result<ModelStream> {
        let file = File::open(self.asset_path(path)?)?;
        Ok(Box::new(file))
    }
}

/// Content resolver for `file://` URLs and plain filesystem paths.
///
/// Provider-backed schemes such as `content://` need the platform and fail
/// here with `Unsupported`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileContentResolver;

impl ContentResolver for FileContentResolver {
    fn open(&self, locator: &str) -> io::Result<ModelStream> {
        let path = match uri_scheme(locator).as_deref() {
            None => PathBuf::from(locator),
            Some("file") => Url::parse(locator)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("'{}' is not a local file URL", locator),
                    )
                })?,
            Some(scheme) => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    format!("no content provider for scheme '{}'", scheme),
                ));
            }
        };

        log::debug!("Opening external content at {:?}", path);
        let file = File::open(path)?;
        Ok(Box::new(file))
    }
}
