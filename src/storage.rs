//! Persisted cache of parsed data sets and trained models.
//!
//! Values are bincode-serialized, zstd-compressed and stored at
//! `<dir>/<key>.bin.zst`. A missing or unreadable entry is a cache miss,
//! never an error: callers recompute and store again.

use crate::config::CacheConfig;
use crate::error::{Result, SentirError};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

/// zstd level 3, a good balance of speed and ratio
const COMPRESSION_LEVEL: i32 = 3;

const EXTENSION: &str = "bin.zst";

/// Key-value store of serializable values on disk.
///
/// # Examples
///
/// ```
/// use sentir::storage::Storage;
///
/// let dir = tempfile::tempdir().expect("create temp dir");
/// let storage = Storage::new(dir.path());
///
/// storage.dump("data/numbers", &vec![1_u32, 2, 3]).expect("write cache");
/// let numbers: Option<Vec<u32>> = storage.load("data/numbers");
/// assert_eq!(numbers, Some(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    dir: PathBuf,
    enabled: bool,
}

impl Storage {
    /// Creates an enabled store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            enabled: true,
        }
    }

    /// A store that never hits and never writes.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            dir: PathBuf::new(),
            enabled: false,
        }
    }

    /// Creates a store from the cache section of the configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            enabled: config.enabled,
        }
    }

    /// Whether reads and writes reach the disk.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// File backing a key. Keys may contain `/` to form subdirectories.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{EXTENSION}"))
    }

    /// Serializes `value` under `key`, replacing any previous entry.
    ///
    /// The entry is written to a temporary file first and renamed into
    /// place, so readers never observe a partial file. A disabled store
    /// does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization, compression or I/O failure.
    pub fn dump<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let payload = bincode::serialize(value)
            .map_err(|e| SentirError::Serialization(format!("Failed to serialize {key}: {e}")))?;
        let compressed = zstd::encode_all(Cursor::new(payload), COMPRESSION_LEVEL)
            .map_err(|e| SentirError::Serialization(format!("Zstd compression failed: {e}")))?;

        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("zst.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            writer.write_all(&compressed)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &path)?;

        log::debug!("cached {key} at {}", path.display());
        Ok(())
    }

    /// Loads the value stored under `key`.
    ///
    /// Returns `None` when the store is disabled, the entry is absent, or it
    /// cannot be decoded as `T`.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if !self.enabled {
            return None;
        }
        let path = self.path_for(key);
        match read_entry(&path) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("cache miss for {key} ({}): {e}", path.display());
                None
            }
        }
    }

    /// Stores a value, logging instead of failing when the write fails.
    pub fn dump_or_warn<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.dump(key, value) {
            log::warn!("could not write cache entry {key}: {e}");
        }
    }
}

/// Reads a data set file, replacing invalid UTF-8 sequences.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_entry<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let compressed = fs::read(path)?;
    let payload = zstd::decode_all(Cursor::new(compressed))
        .map_err(|e| SentirError::Serialization(format!("Zstd decompression failed: {e}")))?;
    bincode::deserialize(&payload)
        .map_err(|e| SentirError::Serialization(format!("Failed to deserialize: {e}")))
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
