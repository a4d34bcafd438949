//! Test fixture loading utilities

use std::path::PathBuf;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load a tagged-format fixture
#[allow(dead_code)]
pub fn load_enw_fixture(name: &str) -> String {
    load_fixture(&format!("enw/{}", name))
}

/// Load a CSL-JSON fixture
#[allow(dead_code)]
pub fn load_csl_fixture(name: &str) -> String {
    load_fixture(&format!("csl/{}", name))
}
