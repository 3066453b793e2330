//! Library crate for etcpwd.
//!
//! This crate exposes:
//! - The passwd line parser and entry type (`entry`)
//! - The dual-indexed account cache (`cache`)
//! - Error and result types (`error`)
//! - Cache configuration (`config`)
//! - In-memory search helpers (`search`)
//! - Command-line arguments of the `etcpwd` binary (`cli`)
//!
//! Only the passwd file itself is read; NSS, LDAP and other account sources are
//! never consulted.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod search;

// Re-export commonly used items at the crate root for convenience
pub use cache::PasswdCache;
pub use config::{CacheConfig, DEFAULT_PASSWD_PATH};
pub use entry::{PasswdEntry, parse_line};
pub use error::{Field, FormatError, PasswdError, Result};
