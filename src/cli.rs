//! Command-line arguments for the `etcpwd` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::CacheConfig;

/// Look up accounts in a passwd-format file
#[derive(Parser, Debug)]
#[command(name = "etcpwd", version)]
#[command(about = "Look up accounts in a passwd-format file", long_about = None)]
pub struct CliArgs {
    /// Passwd-format file to read (default: /etc/passwd)
    #[arg(long = "file", short = 'f', value_name = "PATH", env = "ETCPWD_FILE")]
    pub file: Option<PathBuf>,

    /// Drop lines that fail to parse instead of failing
    #[arg(long = "skip-malformed")]
    pub skip_malformed: bool,

    /// Read `path` and `skip_malformed` from a key = value file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the entry for a username
    User { name: String },
    /// Print the entry for a numeric user id
    Uid {
        #[arg(allow_negative_numbers = true)]
        uid: i64,
    },
    /// Print the home directory of a username
    Home { name: String },
    /// Print all entries, optionally filtered by a search query
    List { query: Option<String> },
}

impl CliArgs {
    /// Resolve the cache configuration.
    ///
    /// Values from `--config` are the base; `--file` and `--skip-malformed`
    /// override them. Without `--config` the defaults are the base. A config
    /// file that was named but cannot be read is an error.
    pub fn to_cache_config(&self) -> Result<CacheConfig> {
        let mut cfg = match &self.config {
            Some(path) => CacheConfig::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => CacheConfig::default(),
        };
        if let Some(file) = &self.file {
            cfg.path = file.clone();
        }
        if self.skip_malformed {
            cfg.skip_malformed = true;
        }
        Ok(cfg)
    }
}
