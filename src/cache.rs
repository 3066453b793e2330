//! In-memory passwd cache with lookups by username and uid.
//!
//! Entries are kept in file order. Two indexes point into that list; when a
//! username or uid appears more than once, the index resolves to the last
//! occurrence while the list still holds every line.
//!
//! The file is read as bytes and decoded lossily, so a stray Latin-1 byte in
//! one entry does not prevent the rest from loading.
//!
//! A reload replaces the contents only once the whole file has been read and
//! parsed. If it fails, the cache keeps whatever it held before.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::{CacheConfig, DEFAULT_PASSWD_PATH};
use crate::entry::{PasswdEntry, parse_line};
use crate::error::{PasswdError, Result};

#[derive(Clone, Debug, Default)]
pub struct PasswdCache {
    entries: Vec<PasswdEntry>,
    by_name: HashMap<String, usize>,
    by_uid: HashMap<i64, usize>,
    skip_malformed: bool,
}

impl PasswdCache {
    /// Empty cache. `skip_malformed` decides whether unparsable lines are
    /// dropped or fail the load.
    pub fn new(skip_malformed: bool) -> Self {
        Self {
            skip_malformed,
            ..Self::default()
        }
    }

    /// Cache built from `/etc/passwd`, failing on any malformed line.
    pub fn new_loaded() -> Result<Self> {
        let mut cache = Self::new(false);
        cache.load_default()?;
        Ok(cache)
    }

    /// Cache built and loaded according to `config`.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        let mut cache = Self::new(config.skip_malformed);
        cache.load_from_path(&config.path)?;
        Ok(cache)
    }

    pub fn load_default(&mut self) -> Result<()> {
        self.load_from_path(DEFAULT_PASSWD_PATH)
    }

    /// Replace the cached contents with the entries in the file at `path`.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| PasswdError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // GECOS fields are not always UTF-8; replace bad bytes instead of failing
        let contents = String::from_utf8_lossy(&bytes);
        let loaded = Self::index(&contents, self.skip_malformed)?;
        tracing::debug!(
            path = %path.display(),
            entries = loaded.entries.len(),
            "loaded passwd file"
        );
        *self = loaded;
        Ok(())
    }

    fn index(contents: &str, skip_malformed: bool) -> Result<Self> {
        let mut cache = Self::new(skip_malformed);
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_line(line) {
                Ok(entry) => cache.insert(entry),
                Err(source) if skip_malformed => {
                    tracing::trace!(line = idx + 1, error = %source, "skipping malformed line");
                }
                Err(source) => {
                    return Err(PasswdError::Malformed {
                        line: idx + 1,
                        source,
                    });
                }
            }
        }
        Ok(cache)
    }

    fn insert(&mut self, entry: PasswdEntry) {
        let pos = self.entries.len();
        self.by_name.insert(entry.username().to_string(), pos);
        self.by_uid.insert(entry.uid(), pos);
        self.entries.push(entry);
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&PasswdEntry> {
        self.by_name.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn lookup_by_uid(&self, uid: i64) -> Option<&PasswdEntry> {
        self.by_uid.get(&uid).map(|&pos| &self.entries[pos])
    }

    /// Shortcut for the uid of `name`, e.g. before a chown.
    pub fn uid_for_username(&self, name: &str) -> Result<i64> {
        self.lookup_by_name(name)
            .map(PasswdEntry::uid)
            .ok_or_else(|| PasswdError::not_found(name))
    }

    /// Shortcut for the home directory of `name`.
    pub fn home_dir_for_username(&self, name: &str) -> Result<&str> {
        self.lookup_by_name(name)
            .map(PasswdEntry::homedir)
            .ok_or_else(|| PasswdError::not_found(name))
    }

    /// Every loaded entry in file order, duplicates included.
    pub fn list_entries(&self) -> &[PasswdEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PasswdEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skip_malformed(&self) -> bool {
        self.skip_malformed
    }
}

impl<'a> IntoIterator for &'a PasswdCache {
    type Item = &'a PasswdEntry;
    type IntoIter = std::slice::Iter<'a, PasswdEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
