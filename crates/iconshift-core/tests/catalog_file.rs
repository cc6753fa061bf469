//! Integration tests for catalog parsing against the real catalog.toml.

use std::path::PathBuf;

use iconshift_core::{CatalogFile, IconCatalog};

fn project_root() -> PathBuf {
    // Navigate from crates/iconshift-core/ up to project root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // crates/
        .unwrap()
        .parent() // project root
        .unwrap()
        .to_path_buf()
}

#[test]
fn test_load_real_catalog() {
    let path = project_root().join("catalog.toml");
    let file = CatalogFile::load(&path).expect("Failed to load catalog.toml");

    assert!(!file.default_component.is_empty());
    assert!(!file.icons.is_empty(), "Expected demo alternate icons");
}

#[test]
fn test_real_catalog_validates() {
    let path = project_root().join("catalog.toml");
    let file = CatalogFile::load(&path).unwrap();
    file.validate().expect("Real catalog.toml should be valid");
}

#[test]
fn test_real_catalog_binds_every_icon() {
    let path = project_root().join("catalog.toml");
    let catalog = CatalogFile::load(&path).unwrap().into_catalog();

    // One binding per alternate plus exactly one default binding.
    let bindings = catalog.bindings();
    let defaults = bindings.iter().filter(|b| b.is_default()).count();
    assert_eq!(defaults, 1, "Expected exactly one default binding");
    assert_eq!(bindings.len() - 1, catalog.supported_icons().len());
}
