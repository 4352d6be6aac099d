use std::path::{Path, PathBuf};

/// Expand `~`, `$VAR` and `${VAR}` in a path.
///
/// Paths that cannot be expanded (e.g. unset variables) are returned unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}
