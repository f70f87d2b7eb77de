//! Fail-soft JSON file reading.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse a JSON file.
///
/// A missing file is silently `None`. Unreadable or malformed files are
/// logged and also yield `None`, so every data file is optional.
pub fn read_json(path: &Path) -> Option<Value> {
    if !path.is_file() {
        return None;
    }

    match try_read_json(path) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to read JSON from {}: {}", path.display(), e);
            None
        }
    }
}

fn try_read_json(path: &Path) -> Result<Value, ReadError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
