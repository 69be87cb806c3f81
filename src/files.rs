//! File helpers for the run loop.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read the description file, one entry per line.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.lines().map(String::from).collect())
}

/// Create `dir` and its parents. Failure is logged, not returned.
pub fn ensure_dir(dir: &Path) -> bool {
    if dir.is_dir() {
        return true;
    }
    match fs::create_dir_all(dir) {
        Ok(()) => {
            info!(dir = %dir.display(), "created package directories");
            true
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "failed to create package directories");
            false
        }
    }
}

/// Write generated source as UTF-8, replacing any existing file.
pub fn write_source(path: &Path, source: &str) -> Result<()> {
    fs::write(path, source.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}
