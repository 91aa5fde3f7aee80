//! Filesystem helpers: atomic writes and same-file checks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `bytes` to `destination` without ever leaving a partial file there.
///
/// The data goes to a hidden sibling temp file first, which is then renamed
/// over the destination. On failure the temp file is removed and the
/// destination keeps its previous contents (or stays absent).
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination);
    if let Err(err) = fs::write(&temp_path, bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    let Err(first) = fs::rename(&temp_path, destination) else {
        return Ok(());
    };
    // Some platforms refuse to rename over an existing file.
    let _ = fs::remove_file(destination);
    fs::rename(&temp_path, destination).map_err(|second| {
        let _ = fs::remove_file(&temp_path);
        io::Error::new(
            second.kind(),
            format!(
                "could not move carrier into {} ({}; then {})",
                destination.display(),
                first,
                second
            ),
        )
    })
}

/// Reports whether `target` names the same file as the existing `source`.
///
/// `target` may not exist yet, so its parent directory is resolved instead
/// and its file name joined back on. Symlinks and `.`/`..` components are
/// resolved on both sides.
pub fn is_same_file(source: &Path, target: &Path) -> io::Result<bool> {
    let source = fs::canonicalize(source)?;
    Ok(resolve_target(target).is_some_and(|target| target == source))
}

fn resolve_target(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    destination.with_file_name(format!(".{}.tmp", name))
}
