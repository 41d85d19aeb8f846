//! Tutorial source entries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::builder::BuildError;

/// One tutorial example read from the source directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntry {
    /// Filename within the source directory
    pub file_name: String,

    /// Heading shown above the example
    pub title: String,

    /// Raw text of the example
    pub body: String,
}

impl SourceEntry {
    /// Read an entry from disk.
    pub fn read(path: &Path) -> Result<Self, BuildError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| BuildError::MalformedName(path.display().to_string()))?
            .to_string();

        let body = fs::read_to_string(path)
            .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            title: derive_title(&file_name),
            file_name,
            body,
        })
    }
}

/// Derive a display title from a filename.
///
/// The last `.ext` suffix is dropped and underscores become spaces. Names
/// without an extension, and dotfiles, keep the whole filename.
///
/// ```
/// use seqdoc_page::derive_title;
///
/// assert_eq!(derive_title("my_example.oct"), "my example");
/// assert_eq!(derive_title("README"), "README");
/// ```
pub fn derive_title(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    stem.replace('_', " ")
}

/// List the files directly inside `source_dir`, sorted by filename.
///
/// Subdirectories are skipped. When `extension` is given, only files with
/// that extension (leading dot optional) are returned.
pub fn discover_entries(
    source_dir: &Path,
    extension: Option<&str>,
) -> Result<Vec<PathBuf>, BuildError> {
    if !source_dir.is_dir() {
        return Err(BuildError::ReadError(format!(
            "Source directory not found: {}",
            source_dir.display()
        )));
    }

    let wanted = extension.map(|e| e.trim_start_matches('.'));
    let mut paths = Vec::new();

    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            BuildError::ReadError(format!("{}: {}", source_dir.display(), e))
        })?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            tracing::debug!("Skipping non-file entry {}", path.display());
            continue;
        }

        if let Some(wanted) = wanted {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != wanted {
                tracing::debug!("Skipping {} (extension is not .{})", path.display(), wanted);
                continue;
            }
        }

        paths.push(path.to_path_buf());
    }

    Ok(paths)
}

/// Discover and read every entry in `source_dir`.
///
/// Stops at the first entry that cannot be read.
pub fn load_entries(
    source_dir: &Path,
    extension: Option<&str>,
) -> Result<Vec<SourceEntry>, BuildError> {
    discover_entries(source_dir, extension)?
        .iter()
        .map(|path| {
            let entry = SourceEntry::read(path)?;
            tracing::debug!("Read {} ({} bytes)", entry.file_name, entry.body.len());
            Ok(entry)
        })
        .collect()
}
