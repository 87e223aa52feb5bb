//! Path normalization.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// Paths that do not exist yet, such as an output directory before the
/// first export, take the fallback.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data");
        std::fs::create_dir(&nested).unwrap();

        let normalized = normalize_path(&nested.join("..").join("data"));
        assert_eq!(normalized, nested.canonicalize().unwrap());
    }

    #[test]
    fn test_normalize_missing_absolute_path() {
        let path = Path::new("/regio/does/not/exist");
        assert_eq!(normalize_path(path), path);
    }

    #[test]
    fn test_normalize_missing_relative_path() {
        let normalized = normalize_path(Path::new("public-not-built-yet"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("public-not-built-yet"));
    }
}
