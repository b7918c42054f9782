//! Shared test utilities for locating the declaration fixtures

use std::path::{Path, PathBuf};

/// return the directory holding the manifest fixtures.
pub fn get_test_data_dir() -> PathBuf {
    // up one level from jslibgen -> workspace root -> test_data
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("Failed to get parent directory of CARGO_MANIFEST_DIR")
        .join("test_data")
}

/// return the path to the sample declaration manifest.
pub fn get_manifest_path() -> PathBuf {
    get_test_data_dir().join("declarations.json")
}

pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
