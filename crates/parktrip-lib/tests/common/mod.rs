//! Park files shared by the integration tests.

use std::path::PathBuf;

use parktrip_lib::Catalog;

/// Sample park files live with the workspace docs, two levels above the crate.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "..", "..", "docs", "fixtures", name]
        .iter()
        .collect()
}

/// Catalog built from both well-formed fixture files.
#[allow(dead_code)]
pub fn full_catalog() -> Catalog {
    Catalog::from_paths([fixture("piedmont_parks.txt"), fixture("coastal_parks.txt")])
        .expect("fixture catalogs load")
}
