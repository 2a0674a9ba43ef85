//! Shell configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::engine::library::MAIN_LIBRARY;
use crate::error::{Error, Result};
use crate::model::{ContentResolver, DirectoryAssetStore, ModelResolver};

/// Where models come from and how strictly references are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Directory standing in for the bundled-asset store
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    /// Catalog directory inside the asset store
    #[serde(default = "defaults::catalog_dir")]
    pub catalog_dir: String,
    /// Reject references with unrecognized schemes
    #[serde(default = "defaults::strict_schemes")]
    pub strict_schemes: bool,
    /// Name of the native engine library
    #[serde(default = "defaults::library_name")]
    pub library_name: String,
}

/// Default asset root.
///
/// `VOXEL_SHELL_ASSET_ROOT` overrides it for development and packaging.
pub fn default_asset_root() -> PathBuf {
    if let Ok(root) = std::env::var(defaults::ASSET_ROOT_ENV) {
        return PathBuf::from(root);
    }

    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(defaults::APP_DIR)
        .join("assets")
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            catalog_dir: defaults::catalog_dir(),
            strict_schemes: defaults::strict_schemes(),
            library_name: defaults::library_name(),
        }
    }
}

impl ShellConfig {
    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let catalog = Path::new(&self.catalog_dir);
        if self.catalog_dir.trim().is_empty() || catalog.is_absolute() {
            return Err(Error::Config(format!(
                "catalog_dir must be a relative path inside the asset store, got '{}'",
                self.catalog_dir
            )));
        }
        if self.library_name.trim().is_empty() {
            return Err(Error::Config("library_name must not be empty".into()));
        }
        Ok(())
    }

    pub fn asset_store(&self) -> DirectoryAssetStore {
        DirectoryAssetStore::new(&self.asset_root)
    }

    /// Resolver over the configured asset store and the given content resolver.
    pub fn resolver(&self, content: Arc<dyn ContentResolver>) -> ModelResolver {
        ModelResolver::new(Arc::new(self.asset_store()), content)
            .with_strict_schemes(self.strict_schemes)
    }

    /// Load the configured engine library into this process, once.
    pub fn ensure_library_loaded<F>(&self, loader: F) -> Result<()>
    where
        F: FnOnce(&str) -> std::result::Result<(), String>,
    {
        MAIN_LIBRARY.ensure_loaded(&self.library_name, loader)?;
        Ok(())
    }
}
