//! Zip export of a selected note set

use crate::error::Result;
use crate::infrastructure::Vault;
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive file name for a tag: `Exported_<tag>.zip`, with path separators
/// replaced so a nested tag cannot escape the destination directory.
pub fn archive_file_name(tag: &str) -> String {
    let safe: String = tag
        .chars()
        .map(|c| match c {
            '/' | '\\' => '-',
            _ => c,
        })
        .collect();
    format!("Exported_{}.zip", safe)
}

/// Write the selected notes into a single zip archive under `destination`.
///
/// Entries are stored at their vault-relative paths, deflate-compressed.
/// The destination directory is created if missing. Returns the path of the
/// written archive. The caller guarantees a non-empty selection.
pub fn write_archive(
    vault: &Vault,
    selected: &BTreeSet<String>,
    destination: &Path,
    tag: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(destination)?;
    let archive_path = destination.join(archive_file_name(tag));

    let file = fs::File::create(&archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for rel in selected {
        writer.start_file(rel.as_str(), options)?;
        let content = fs::read(vault.absolute_path(rel))?;
        writer.write_all(&content)?;
    }

    writer.finish()?;
    Ok(archive_path)
}
