//! Helpers shared by the integration tests: fixture loading and the URL
//! layout of the mock servers.

use std::fs;
use std::path::PathBuf;

pub fn root_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR")))
        .parent()
        .unwrap()
        .to_path_buf()
}

pub fn tests_path() -> PathBuf {
    root_path().join("crates").join("linkedin").join("tests")
}

pub fn testdata_path() -> PathBuf {
    tests_path().join("testdata")
}

/// Reads `testdata/<name>`, panicking with the path if it's missing.
pub fn fixture(name: &str) -> String {
    let path = testdata_path().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("unable to read fixture {}: {err}", path.display()))
}

/// Base URL of the API as served by a mock server listening on `base_url`,
/// laid out like the real one.
pub fn api_base_url(base_url: &str) -> String {
    format!("{}/v2/", base_url.trim_end_matches('/'))
}
