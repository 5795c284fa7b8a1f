//! Result Store Module
//!
//! Persistent key-value cache of factorizations, loaded whole and saved whole.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, warn};

use crate::cache::FactorRecord;
use crate::error::{PrimeError, Result};

// == Store Origin ==
/// How the in-memory store came to be, reported after `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOrigin {
    /// Parsed from an existing file
    Loaded,
    /// No file yet, started empty
    Missing,
    /// File held invalid JSON, started empty and prior results are lost
    Corrupt,
    /// File exists but could not be read, started empty
    Unreadable,
}

// == Result Store ==
/// Mapping from decimal number strings to their factor records.
#[derive(Debug)]
pub struct ResultStore {
    /// Location of the JSON file backing the store
    path: PathBuf,
    /// Key-value storage
    records: BTreeMap<String, FactorRecord>,
    /// Where the contents came from
    origin: StoreOrigin,
    /// Set by insert, cleared by a successful save
    dirty: bool,
}

impl ResultStore {
    // == Constructor ==
    /// Creates an empty store that will persist to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
            origin: StoreOrigin::Missing,
            dirty: false,
        }
    }

    // == Load ==
    /// Reads the store from `path`, never failing.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file
    /// also yields an empty store with a warning; the next save overwrites it.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);

        let content = match fs::read_to_string(&store.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "Cache file '{}' not found. Creating a new one.",
                    store.path.display()
                );
                return store;
            }
            Err(e) => {
                warn!(
                    "Cache file '{}' could not be read ({}). Starting with an empty cache.",
                    store.path.display(),
                    e
                );
                store.origin = StoreOrigin::Unreadable;
                return store;
            }
        };

        match serde_json::from_str::<BTreeMap<String, FactorRecord>>(&content) {
            Ok(records) => {
                debug!(
                    "Loaded {} cached results from '{}'",
                    records.len(),
                    store.path.display()
                );
                store.records = records;
                store.origin = StoreOrigin::Loaded;
            }
            Err(e) => {
                warn!(
                    "Cache file '{}' is corrupt ({}). Starting with an empty cache.",
                    store.path.display(),
                    e
                );
                store.origin = StoreOrigin::Corrupt;
            }
        }

        store
    }

    // == Save ==
    /// Rewrites the whole store to disk.
    ///
    /// Writes a sibling temp file first and renames it over the target, so
    /// readers see either the old file or the new one.
    pub fn save(&mut self) -> Result<()> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.records.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| PrimeError::io(parent, e))?;
            }
        }

        let temp_path = temp_path_for(&self.path);
        fs::write(&temp_path, &buffer).map_err(|e| PrimeError::io(&temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            // Best effort, the rename error is the one worth reporting
            let _ = fs::remove_file(&temp_path);
            return Err(PrimeError::io(&self.path, e));
        }

        self.dirty = false;
        debug!(
            "Saved {} cached results to '{}'",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    // == Lookup ==
    /// Returns the record stored under exactly `key`.
    ///
    /// No normalization happens: "007" and "7" are different keys.
    pub fn lookup(&self, key: &str) -> Option<&FactorRecord> {
        self.records.get(key)
    }

    // == Insert ==
    /// Stores `record` under `key` in memory only; call `save` to persist.
    pub fn insert(&mut self, key: impl Into<String>, record: FactorRecord) {
        self.records.insert(key.into(), record);
        self.dirty = true;
    }

    // == Accessors ==
    /// Where the contents came from.
    pub fn origin(&self) -> StoreOrigin {
        self.origin
    }

    /// True when an insert has not been saved yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// File backing the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// == Utility Functions ==
/// Canonical store key for a number: its plain decimal digits.
pub fn key_for(n: &BigUint) -> String {
    n.to_string()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
