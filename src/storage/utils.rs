use crate::error::AppError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Serializes a value to a pretty-printed JSON string
pub fn serialize_to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Path of the temporary file written before `path` is replaced
#[must_use]
pub fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

/// Writes `value` to `<path>.tmp` and renames it over `path`
///
/// Readers see either the previous document or the new one, never a partial write.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = serialize_to_json(value)?;
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, json.as_bytes()).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// Reads a JSON object from `path`
///
/// A missing file, an unreadable file or a document that is not an object all
/// yield `None`; the caller falls back to defaults.
pub async fn read_json_object(path: &Path) -> Option<Map<String, Value>> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            warn!("{} does not hold a JSON object, ignoring it", path.display());
            None
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}
