//! Filesystem helpers for directory listing.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Names of the immediate subdirectories of `dir`, sorted.
///
/// Symlinks to directories are followed. Entries whose names are not valid
/// UTF-8 are skipped.
pub(crate) fn list_subdirs(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!(?raw, "skipping non-UTF-8 directory name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Final path component as a string, or `""`.
#[must_use]
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Join `relative` onto `root`, dropping any leading root or drive prefix so
/// `"/proto1"` resolves to `<root>/proto1` rather than replacing `root`.
#[must_use]
pub(crate) fn join_under(root: &Path, relative: &str) -> PathBuf {
    let tail: PathBuf = Path::new(relative)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    root.join(tail)
}
