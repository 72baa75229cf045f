//! List tags use case

use crate::domain::extract;
use crate::error::Result;
use crate::infrastructure::Vault;
use std::collections::BTreeSet;

/// Service for listing all tags used in a vault.
pub struct ListTagsService {
    vault: Vault,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(vault: Vault) -> Self {
        Self { vault }
    }

    /// Collect the sorted union of tags across every note.
    pub fn execute(&self) -> Result<Vec<String>> {
        let mut tags = BTreeSet::new();
        for note in self.vault.notes() {
            let text = self.vault.read_note(note)?;
            tags.extend(extract::tags(&text));
        }
        Ok(tags.into_iter().collect())
    }
}
