//! Reference resolution against real files.

use voxel_shell::{ModelReference, ResolveError};

use crate::fixture::{Host, Rig, CATALOG};

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

/// Whatever is written to the backing store comes back byte for byte.
#[test]
fn test_bundled_round_trip() {
    for len in [0usize, 1, 4096, 1 << 20] {
        let data = payload(len);
        let rig = Rig::new(&[("model.vox", data.as_slice())], Host::default());

        let bytes = rig
            .resolver()
            .resolve(&ModelReference::bundled(CATALOG, "model.vox"))
            .unwrap();
        assert_eq!(bytes.len(), len);
        assert_eq!(bytes.as_slice(), data.as_slice());
    }
}

#[test]
fn test_external_file_round_trip() {
    let rig = Rig::new(&[], Host::default());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("download.vly");
    let data = payload(70_000);
    std::fs::write(&path, &data).unwrap();

    let reference = ModelReference::from_uri(path.to_str().unwrap());
    let bytes = rig.resolver().resolve(&reference).unwrap();
    assert_eq!(bytes.as_slice(), data.as_slice());
    assert_eq!(rig.content.opened(), 1);
    assert_eq!(rig.assets.opened(), 0);
}

#[test]
fn test_missing_bundled_asset_fails() {
    let rig = Rig::new(&[("cube.model", b"cube".as_slice())], Host::default());
    let result = rig
        .resolver()
        .resolve(&ModelReference::bundled(CATALOG, "sphere.model"));

    match result {
        Err(ResolveError::Open { locator, .. }) => {
            assert_eq!(locator, format!("{}/sphere.model", CATALOG))
        }
        other => panic!("expected an open failure, got {:?}", other),
    }
}

#[test]
fn test_asset_uri_cannot_escape_store() {
    let rig = Rig::new(&[], Host::default());
    let reference = ModelReference::from_uri("assets:///../outside.vox");
    assert!(matches!(
        rig.resolver().resolve(&reference),
        Err(ResolveError::Open { .. })
    ));
}

#[test]
fn test_provider_uri_without_platform_fails() {
    let rig = Rig::new(&[], Host::default());
    let reference = ModelReference::from_uri("content://media/external/file/12");
    assert!(matches!(
        rig.resolver().resolve(&reference),
        Err(ResolveError::Open { .. })
    ));
}

#[test]
fn test_unknown_scheme_strict_and_permissive() {
    let rig = Rig::new(&[], Host::default());
    let reference = ModelReference::from_uri("smb://nas/models/ship.vox");

    // Permissive: handed to content resolution, which fails on its own.
    assert!(matches!(
        rig.resolver().resolve(&reference),
        Err(ResolveError::Open { .. })
    ));
    assert_eq!(rig.content.opened(), 1);

    // Strict: rejected before any stream is opened.
    assert!(matches!(
        rig.resolver().with_strict_schemes(true).resolve(&reference),
        Err(ResolveError::UnsupportedScheme(_))
    ));
    assert_eq!(rig.content.opened(), 1);
}
