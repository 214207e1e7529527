//! Store snapshot serialization using `MessagePack`.
//!
//! The runtime persists the in-memory campaign store between sessions by
//! snapshotting it to a file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tally_foundation::{Error, Result};
use tally_store::MemoryStore;

/// Serializes a store to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(store: &MemoryStore) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(store).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a store from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<MemoryStore> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a store snapshot to a file, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to, or if
/// serialization fails.
pub fn save_to_file<P: AsRef<Path>>(store: &MemoryStore, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(store)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    Ok(())
}

/// Loads a store snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization
/// fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<MemoryStore> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    from_bytes(&bytes)
}
