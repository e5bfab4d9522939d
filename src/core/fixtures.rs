//! Recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("CINEPULSE_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// `/quotes/random` -> `quotes_random.json`
pub(crate) fn fixture_name(path: &str) -> String {
    let stem = path.trim_matches('/').replace('/', "_");
    format!("{stem}.json")
}

pub(crate) fn record_fixture(path: &str, body: &str) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    fs::create_dir_all(&dir)?;
    let file = dir.join(fixture_name(path));
    fs::write(&file, body)?;
    tracing::debug!("CINEPULSE_RECORD: wrote fixture to {}", file.display());
    Ok(())
}
