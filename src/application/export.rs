//! Tagged-subset export use case
//!
//! Orchestrates the full workflow: seed selection by tag, optional link
//! closure, and archive writing.

use crate::domain::{extract, resolve};
use crate::error::{Result, VaultexError};
use crate::infrastructure::{archive, Vault};
use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;

/// Options for a single export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Tag to select, without the leading `#`.
    pub tag: String,

    /// Follow wiki-links from tagged notes until fixpoint.
    pub recursive: bool,

    /// Destination directory (None = current working directory).
    pub output: Option<PathBuf>,
}

/// Result of an export run.
#[derive(Debug)]
pub struct ExportOutcome {
    /// Path of the written archive; None when the selection was empty.
    pub archive: Option<PathBuf>,

    /// Selected note paths, sorted.
    pub files: Vec<String>,
}

/// Service for exporting the tag-selected subset of a vault.
pub struct ExportService {
    vault: Vault,
}

impl ExportService {
    /// Create a new export service over an opened vault.
    pub fn new(vault: Vault) -> Self {
        ExportService { vault }
    }

    /// Execute the export.
    ///
    /// Seeds the selection with every note carrying the tag, expands it
    /// over wiki-links when recursive mode is on, and writes the archive.
    /// An empty selection writes nothing and reports an empty outcome.
    pub fn execute(&self, options: &ExportOptions) -> Result<ExportOutcome> {
        let tag = normalize_tag(&options.tag)?;

        let mut selected = self.seed(tag)?;
        if options.recursive {
            self.follow_links(&mut selected)?;
        }

        if selected.is_empty() {
            return Ok(ExportOutcome {
                archive: None,
                files: Vec::new(),
            });
        }

        let destination = options
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let archive_path = archive::write_archive(&self.vault, &selected, &destination, tag)?;

        Ok(ExportOutcome {
            archive: Some(archive_path),
            files: selected.into_iter().collect(),
        })
    }

    /// Seed set: every note whose tags contain `tag` (exact,
    /// case-sensitive).
    fn seed(&self, tag: &str) -> Result<BTreeSet<String>> {
        let mut selected = BTreeSet::new();
        for note in self.vault.notes() {
            let text = self.vault.read_note(note)?;
            if extract::tags(&text).contains(tag) {
                selected.insert(note.clone());
            }
        }
        Ok(selected)
    }

    /// Grow `selected` to its closure under one-hop link resolution.
    ///
    /// Worklist algorithm: each selected note is read and parsed exactly
    /// once; newly resolved notes are queued as they are discovered. The
    /// set only grows and a note is enqueued at most once, so the loop
    /// terminates on any finite vault.
    fn follow_links(&self, selected: &mut BTreeSet<String>) -> Result<()> {
        let mut frontier: VecDeque<String> = selected.iter().cloned().collect();

        while let Some(note) = frontier.pop_front() {
            let text = self.vault.read_note(&note)?;
            for target in extract::links(&text) {
                for hit in resolve::resolve(&target, self.vault.notes()) {
                    if selected.insert(hit.clone()) {
                        frontier.push_back(hit.clone());
                    }
                }
            }
        }

        Ok(())
    }
}

/// Strip an optional leading `#` and reject empty tags.
fn normalize_tag(tag: &str) -> Result<&str> {
    let tag = tag.strip_prefix('#').unwrap_or(tag);
    if tag.is_empty() {
        return Err(VaultexError::Config("Tag must not be empty".to_string()));
    }
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vault_with_notes(notes: &[(&str, &str)]) -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        for (rel, content) in notes {
            let path = dir.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        let vault = Vault::open(dir.path()).unwrap();
        (dir, vault)
    }

    fn run(
        vault: Vault,
        tag: &str,
        recursive: bool,
        output: PathBuf,
    ) -> ExportOutcome {
        let service = ExportService::new(vault);
        service
            .execute(&ExportOptions {
                tag: tag.to_string(),
                recursive,
                output: Some(output),
            })
            .unwrap()
    }

    fn chain_vault() -> (TempDir, Vault) {
        vault_with_notes(&[
            ("A.md", "seed note #proj\n[[B]]"),
            ("B.md", "middle note\n[[C]]"),
            ("C.md", "leaf note"),
        ])
    }

    #[test]
    fn test_non_recursive_selects_seed_only() {
        let (_dir, vault) = chain_vault();
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", false, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["A.md"]);
        assert!(outcome.archive.is_some());
    }

    #[test]
    fn test_recursive_selects_closure() {
        let (_dir, vault) = chain_vault();
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", true, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["A.md", "B.md", "C.md"]);
    }

    #[test]
    fn test_missing_tag_is_empty_no_archive() {
        let (_dir, vault) = chain_vault();
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "missing", true, out.path().to_path_buf());
        assert!(outcome.files.is_empty());
        assert!(outcome.archive.is_none());
        assert!(fs::read_dir(out.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_self_link_terminates_without_duplicates() {
        let (_dir, vault) = vault_with_notes(&[("Loop.md", "#proj links [[Loop]]")]);
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", true, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["Loop.md"]);
    }

    #[test]
    fn test_link_cycle_terminates() {
        let (_dir, vault) = vault_with_notes(&[
            ("A.md", "#proj [[B]]"),
            ("B.md", "[[A]]"),
        ]);
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", true, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["A.md", "B.md"]);
    }

    #[test]
    fn test_unresolvable_link_is_skipped() {
        let (_dir, vault) = vault_with_notes(&[("A.md", "#proj [[Ghost]]")]);
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", true, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["A.md"]);
    }

    #[test]
    fn test_ambiguous_link_selects_all_matches() {
        let (_dir, vault) = vault_with_notes(&[
            ("Start.md", "#proj [[Note]]"),
            ("a/Note.md", "left"),
            ("b/Note.md", "right"),
        ]);
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", true, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["Start.md", "a/Note.md", "b/Note.md"]);
    }

    #[test]
    fn test_exact_match_beats_substring() {
        let (_dir, vault) = vault_with_notes(&[
            ("Start.md", "#proj [[Note]]"),
            ("Note.md", "wanted"),
            ("Footnote.md", "unwanted"),
        ]);
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", true, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["Note.md", "Start.md"]);
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        let (_dir, vault) = vault_with_notes(&[("A.md", "#Proj")]);
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "proj", false, out.path().to_path_buf());
        assert!(outcome.files.is_empty());
    }

    #[test]
    fn test_leading_hash_stripped_from_tag() {
        let (_dir, vault) = vault_with_notes(&[("A.md", "#proj")]);
        let out = TempDir::new().unwrap();

        let outcome = run(vault, "#proj", false, out.path().to_path_buf());
        assert_eq!(outcome.files, vec!["A.md"]);
    }

    #[test]
    fn test_empty_tag_rejected() {
        let (_dir, vault) = vault_with_notes(&[("A.md", "#proj")]);
        let service = ExportService::new(vault);

        let result = service.execute(&ExportOptions {
            tag: "#".to_string(),
            recursive: false,
            output: None,
        });
        assert!(matches!(result.unwrap_err(), VaultexError::Config(_)));
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let (_dir, vault) = chain_vault();
        let service = ExportService::new(vault);

        let first = service.seed("proj").unwrap();
        let second = service.seed("proj").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_closure_is_monotonic_over_seed() {
        let (_dir, vault) = chain_vault();
        let service = ExportService::new(vault);

        let seeds = service.seed("proj").unwrap();
        let mut closed = seeds.clone();
        service.follow_links(&mut closed).unwrap();
        assert!(closed.is_superset(&seeds));
    }

    #[test]
    fn test_closure_is_a_fixpoint() {
        let (_dir, vault) = chain_vault();
        let service = ExportService::new(vault);

        let mut closed = service.seed("proj").unwrap();
        service.follow_links(&mut closed).unwrap();

        let mut again = closed.clone();
        service.follow_links(&mut again).unwrap();
        assert_eq!(closed, again);
    }
}
