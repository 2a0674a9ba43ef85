//! Source selection: the bundled model catalog plus an external pick.

use std::io;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ipc::intent::LaunchIntent;
use crate::model::reference::ModelReference;
use crate::model::store::AssetStore;

/// Content type passed to the document picker: anything.
pub const ANY_CONTENT_TYPE: &str = "*/*";

/// What the user picked on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Catalog entry at this index
    Entry(usize),
    /// The "Explore" button
    External,
}

/// Platform document picker.
pub trait DocumentPicker: Send {
    /// Let the user pick a document of `content_type`. `None` on cancel.
    fn pick(&mut self, content_type: &str) -> Option<String>;
}

/// Starts a render window.
pub trait SessionLauncher: Send + Sync {
    fn launch(&self, intent: LaunchIntent);
}

/// The model selection screen.
///
/// Lists the bundled catalog once, at creation, and turns a choice into a
/// model reference and a render window launch.
pub struct SourceSelector {
    catalog_root: String,
    entries: Vec<String>,
    picker: Box<dyn DocumentPicker>,
    launcher: Arc<dyn SessionLauncher>,
}

impl SourceSelector {
    /// Create the selector, reading the catalog listing from `assets`.
    ///
    /// A missing catalog directory is an empty catalog.
    pub fn new(
        assets: &dyn AssetStore,
        catalog_root: &str,
        picker: Box<dyn DocumentPicker>,
        launcher: Arc<dyn SessionLauncher>,
    ) -> Result<Self> {
        let entries = match assets.list(catalog_root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("Catalog '{}' does not exist, listing nothing", catalog_root);
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        log::info!("Catalog '{}' has {} models", catalog_root, entries.len());

        Ok(Self {
            catalog_root: catalog_root.to_string(),
            entries,
            picker,
            launcher,
        })
    }

    /// Catalog entry names in listing order.
    pub fn list_catalog(&self) -> &[String] {
        &self.entries
    }

    /// Apply a choice.
    ///
    /// Returns the chosen reference after launching a render window for it,
    /// or `None` when the user cancelled the external pick.
    pub fn choose(&mut self, choice: Choice) -> Result<Option<ModelReference>> {
        let reference = match choice {
            Choice::Entry(index) => {
                let entry = self.entries.get(index).ok_or(Error::CatalogIndex {
                    index,
                    len: self.entries.len(),
                })?;
                ModelReference::bundled(&self.catalog_root, entry)
            }
            Choice::External => match self.picker.pick(ANY_CONTENT_TYPE) {
                Some(locator) => ModelReference::external(locator),
                None => {
                    log::debug!("External pick cancelled");
                    return Ok(None);
                }
            },
        };

        log::info!("Launching render window for {}", reference);
        self.launcher.launch(LaunchIntent::view(&reference));
        Ok(Some(reference))
    }
}
