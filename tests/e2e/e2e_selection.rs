//! Selection screen tests: catalog listing and choices.

use std::sync::Arc;

use voxel_shell::{
    Choice, DirectoryAssetStore, DocumentPicker, Error, ModelReference, Scheme, SessionLauncher,
    SourceSelector, ACTION_VIEW,
};

use crate::fixture::{AssetRoot, Host, CATALOG};

struct Picker(Option<String>);

impl DocumentPicker for Picker {
    fn pick(&mut self, _content_type: &str) -> Option<String> {
        self.0.take()
    }
}

fn selector(root: &AssetRoot, host: &Host, picked: Option<&str>) -> SourceSelector {
    let launcher: Arc<dyn SessionLauncher> = Arc::new(host.clone());
    SourceSelector::new(
        &root.store(),
        CATALOG,
        Box::new(Picker(picked.map(String::from))),
        launcher,
    )
    .expect("Failed to list catalog")
}

/// Every catalog entry maps to `<root>/<entry>` as a bundled asset.
#[test]
fn test_every_entry_is_bundled_under_catalog_root() {
    let root = AssetRoot::with_models(&[
        ("cube.model", b"c".as_slice()),
        ("castle.vox", b"v".as_slice()),
        ("tree.vly", b"t".as_slice()),
    ]);
    let host = Host::default();
    let mut selector = selector(&root, &host, None);

    let entries = selector.list_catalog().to_vec();
    assert_eq!(entries.len(), 3);

    for (index, entry) in entries.iter().enumerate() {
        let reference = selector.choose(Choice::Entry(index)).unwrap().unwrap();
        assert_eq!(reference.scheme, Scheme::BundledAsset);
        assert_eq!(reference.locator, format!("{}/{}", CATALOG, entry));
    }

    let launches = host.launches.lock().unwrap();
    assert_eq!(launches.len(), 3);
    assert!(launches.iter().all(|intent| intent.action.as_deref() == Some(ACTION_VIEW)));
}

#[test]
fn test_empty_catalog_still_offers_external() {
    let root = AssetRoot::with_models(&[]);
    let host = Host::default();
    let mut selector = selector(&root, &host, Some("/sdcard/Download/ship.vox"));

    assert!(selector.list_catalog().is_empty());
    assert!(matches!(
        selector.choose(Choice::Entry(0)),
        Err(Error::CatalogIndex { .. })
    ));

    let reference = selector.choose(Choice::External).unwrap();
    assert_eq!(reference, Some(ModelReference::external("/sdcard/Download/ship.vox")));
}

#[test]
fn test_external_pick_is_passed_through() {
    let root = AssetRoot::with_models(&[]);
    let host = Host::default();
    let locator = "content://com.android.externalstorage.documents/document/primary%3Aship.vox";
    let mut selector = selector(&root, &host, Some(locator));

    let reference = selector.choose(Choice::External).unwrap().unwrap();
    assert_eq!(reference.scheme, Scheme::ExternalContent);
    assert_eq!(reference.locator, locator);
    assert_eq!(host.launches.lock().unwrap()[0].data.as_deref(), Some(locator));
}

/// Cancelling the picker leaves the selector as it was.
#[test]
fn test_cancelled_pick_creates_no_session() {
    let root = AssetRoot::with_models(&[("cube.model", b"c".as_slice())]);
    let host = Host::default();
    let mut selector = selector(&root, &host, None);

    assert_eq!(selector.choose(Choice::External).unwrap(), None);
    assert!(host.launches.lock().unwrap().is_empty());

    // Still usable afterwards
    assert!(selector.choose(Choice::Entry(0)).unwrap().is_some());
    assert_eq!(host.launches.lock().unwrap().len(), 1);
}

/// A store without the catalog directory still offers the external pick.
#[test]
fn test_missing_catalog_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let host = Host::default();
    let launcher: Arc<dyn SessionLauncher> = Arc::new(host.clone());
    let mut selector = SourceSelector::new(
        &DirectoryAssetStore::new(dir.path()),
        CATALOG,
        Box::new(Picker(Some("/sdcard/Download/ship.vox".to_string()))),
        launcher,
    )
    .unwrap();

    assert!(selector.list_catalog().is_empty());
    let reference = selector.choose(Choice::External).unwrap();
    assert_eq!(reference, Some(ModelReference::external("/sdcard/Download/ship.vox")));
    assert_eq!(host.launches.lock().unwrap().len(), 1);
}
