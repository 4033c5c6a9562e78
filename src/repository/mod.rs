//! Repository collaborators: paginated file listing and root-contained reads.
//!
//! The repository root is always an explicit argument; nothing here looks at
//! the process working directory.

pub mod content;

use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

pub use content::{read_file, resolve_contained};

/// Largest page size `list_files` will return.
pub const MAX_PER_PAGE: usize = 100;

/// Directory names skipped while walking, in addition to hidden entries.
pub fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", "vendor", "__pycache__", "dist", "build"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Listing parameters. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQuery {
    /// Keep only files with this extension (`py`, `.ts`, ...).
    pub extension: Option<String>,
    pub page: usize,
    pub per_page: usize,
    pub exclude_dirs: Vec<String>,
}

impl Default for FileQuery {
    fn default() -> Self {
        Self {
            extension: None,
            page: 1,
            per_page: MAX_PER_PAGE,
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

/// One page of repository-relative file paths, in sorted walk order.
///
/// `page` is clamped to at least 1 and `per_page` to `1..=100`. A page past
/// the end is empty.
pub fn list_files(root: &Path, query: &FileQuery) -> Result<Vec<String>> {
    let page = query.page.max(1);
    let per_page = query.per_page.clamp(1, MAX_PER_PAGE);
    let skip = (page - 1).saturating_mul(per_page);

    let files = walk_files(root, query.extension.as_deref(), &query.exclude_dirs)?;
    Ok(files.into_iter().skip(skip).take(per_page).collect())
}

/// Every non-excluded file under `root`, unpaginated.
pub fn walk_files(
    root: &Path,
    extension: Option<&str>,
    exclude_dirs: &[String],
) -> Result<Vec<String>> {
    let extension = extension
        .map(|e| e.trim_start_matches('.'))
        .filter(|e| !e.is_empty());

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e, exclude_dirs));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(ext) = extension {
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        files.push(relative.to_string_lossy().into_owned());
    }

    tracing::debug!(root = %root.display(), count = files.len(), "walked repository");
    Ok(files)
}

fn is_excluded(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    entry.file_type().is_dir() && exclude_dirs.iter().any(|d| *d == name)
}
