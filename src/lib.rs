//! vaultex - Tag-driven vault export
//!
//! A command-line tool that selects markdown notes by tag, optionally
//! follows wiki-links to everything reachable from the tagged set, and
//! exports the result into a zip archive.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::VaultexError;
