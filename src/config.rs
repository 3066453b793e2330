//! Cache configuration: source path and malformed-line policy.
//!
//! A [`CacheConfig`] can be built in code or read from a small `key = value`
//! file:
//!
//! ```text
//! # etcpwd
//! path = /etc/passwd
//! skip_malformed = false
//! ```

use std::path::{Path, PathBuf};

/// Standard location of the account database.
pub const DEFAULT_PASSWD_PATH: &str = "/etc/passwd";

/// Where to load accounts from and what to do with lines that fail to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Passwd-format file to read.
    pub path: PathBuf,
    /// Discard malformed lines instead of aborting the load.
    pub skip_malformed: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PASSWD_PATH),
            skip_malformed: false,
        }
    }
}

impl CacheConfig {
    pub fn new(path: impl Into<PathBuf>, skip_malformed: bool) -> Self {
        Self {
            path: path.into(),
            skip_malformed,
        }
    }

    /// Load a configuration file.
    ///
    /// Comments (lines starting with '#') and empty lines are ignored, as are
    /// unknown keys and lines without a value. Keys that are not present keep
    /// their default.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file is missing or unreadable.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    fn parse(contents: &str) -> Self {
        let mut cfg = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            let (lhs, rhs) = (lhs.trim(), rhs.trim());
            if lhs.is_empty() || rhs.is_empty() {
                continue;
            }

            match lhs {
                "path" => cfg.path = PathBuf::from(rhs),
                "skip_malformed" => cfg.skip_malformed = parse_bool(rhs),
                _ => {}
            }
        }
        cfg
    }

    /// Write the configuration in the format read by [`from_file`](Self::from_file).
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let buf = format!(
            "# etcpwd\n\
             # path: passwd-format file to load\n\
             path = {}\n\
             # skip_malformed: true to drop unparsable lines, false to fail the load\n\
             skip_malformed = {}\n",
            self.path.display(),
            self.skip_malformed
        );
        std::fs::write(path, buf)
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
