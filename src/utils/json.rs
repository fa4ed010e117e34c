use std::fs;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) fn parse_records<T: DeserializeOwned>(json: &str) -> LibraryResult<Vec<T>> {
    serde_json::from_str(json).map_err(LibraryError::from)
}

pub(crate) fn read_records<T: DeserializeOwned>(path: &Path) -> LibraryResult<Vec<T>> {
    if !path.exists() {
        return Err(LibraryError::not_found(
            format!("data file {} not found", path.display()).as_str()));
    }
    let json = fs::read_to_string(path)?;
    parse_records(json.as_str())
}

pub(crate) fn write_records<T: Serialize>(path: &Path, records: &[T]) -> LibraryResult<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(records.len())
}
