use std::path::{Component, Path, PathBuf};

use crate::error::{PrimeError, Result};

/// Read a repository file as UTF-8 text.
///
/// `relative` is resolved against `root` and must stay inside it, both
/// before and after symlinks are followed.
pub fn read_file(root: &Path, relative: impl AsRef<Path>) -> Result<String> {
    let path = resolve_contained(root, relative.as_ref())?;
    let bytes = std::fs::read(&path)?;
    String::from_utf8(bytes).map_err(|e| PrimeError::Decode(e.utf8_error()))
}

/// Resolve `relative` under `root`, rejecting anything that escapes it.
///
/// Containment is component-wise, so `/repo-old/x` is not inside `/repo`.
/// The returned path is canonical; the target must exist.
pub fn resolve_contained(root: &Path, relative: &Path) -> Result<PathBuf> {
    let root = root.canonicalize()?;
    let outside = || PrimeError::PathOutsideRoot {
        path: relative.display().to_string(),
    };

    let lexical = normalize(&root.join(relative));
    if !lexical.starts_with(&root) {
        return Err(outside());
    }

    let resolved = lexical.canonicalize()?;
    if !resolved.starts_with(&root) {
        return Err(outside());
    }

    Ok(resolved)
}

/// Collapse `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
