//! Vault discovery and note access

use crate::error::{Result, VaultexError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The full set of markdown documents under a root directory.
///
/// Built once by [`Vault::open`] and immutable thereafter. Notes are
/// identified by their `/`-normalized path relative to the root, in
/// traversal order (order is not guaranteed stable across filesystems).
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    notes: Vec<String>,
}

impl Vault {
    /// Walk `root` and collect every `.md` file (case-sensitive suffix).
    ///
    /// Hidden directories are walked like any other. Construction is a pure
    /// function: calling it again on the same root produces a fresh value.
    pub fn open(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultexError::VaultNotFound(root.to_path_buf()))?;

        if !root.is_dir() {
            return Err(VaultexError::VaultNotFound(root));
        }

        let mut notes = Vec::new();
        for entry in WalkDir::new(&root).follow_links(false) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_md = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(".md"));
            if !is_md {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&root) else {
                continue;
            };
            if let Some(rel) = normalize_relative_path(rel) {
                notes.push(rel);
            }
        }

        Ok(Vault { root, notes })
    }

    /// Canonicalized vault root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All note paths relative to the root, in traversal order.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Load the content of a note. Not cached; every call re-reads.
    pub fn read_note(&self, rel: &str) -> Result<String> {
        fs::read_to_string(self.absolute_path(rel)).map_err(VaultexError::Io)
    }

    /// Absolute path of a note identified by its relative path.
    pub fn absolute_path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

fn normalize_relative_path(path: &Path) -> Option<String> {
    let parts: Vec<&str> = path
        .iter()
        .map(|part| part.to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}
