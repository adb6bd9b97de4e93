//! Record loading and saving
//!
//! The serialization boundary of the crate: records travel as JSON documents
//! with the wire field names (`rootOptions`, `poolOptions`, ...). Loading
//! only parses; [`crate::validate::validate`] still decides whether the
//! parsed record is usable.

use crate::error::{ConfigError, ConfigResult};
use crate::record::ConfigFile;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a record from a JSON string
pub fn load_str(raw: &str) -> ConfigResult<ConfigFile> {
    let record: ConfigFile = serde_json::from_str(raw)?;
    Ok(record)
}

/// Read and parse a record file.
///
/// I/O failures carry the path so the author knows which of a run's record
/// files went missing.
pub fn load_path(path: &Path) -> ConfigResult<ConfigFile> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record = load_str(&raw)?;
    debug!(
        "Loaded record '{}' from {}",
        record.root_options.short_name,
        path.display()
    );
    Ok(record)
}

/// Serialize a record to compact JSON
pub fn to_json_string(record: &ConfigFile) -> ConfigResult<String> {
    Ok(serde_json::to_string(record)?)
}

/// Serialize a record to pretty-printed JSON, the form kept in proposal
/// directories
pub fn to_json_string_pretty(record: &ConfigFile) -> ConfigResult<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Write a record as pretty-printed JSON
pub fn write_path(record: &ConfigFile, path: &Path) -> ConfigResult<()> {
    let raw = to_json_string_pretty(record)?;
    fs::write(path, raw).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Wrote record '{}' to {}",
        record.root_options.short_name,
        path.display()
    );
    Ok(())
}
