//! Output directory resolution for dispatcher runs.
//!
//! Each run writes into a directory whose name is a pure function of the
//! lookback window length, so repeated runs with the same parameter reuse
//! the same location across process lifetimes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DispatchError;

/// Directory name for a run with the given lookback window length.
#[must_use]
pub fn output_dir_name(lookback_window: u32) -> String {
    format!("cpd_{lookback_window}lbw")
}

/// Path of the output directory for a run, under `output_root`.
#[must_use]
pub fn resolve_output_dir(output_root: &Path, lookback_window: u32) -> PathBuf {
    output_root.join(output_dir_name(lookback_window))
}

/// Resolve the run's output directory and create it if absent.
///
/// Creation is non-recursive: `output_root` itself must already exist. An
/// existing directory is accepted as-is, so calling this twice for the same
/// lookback value is a no-op the second time.
///
/// # Errors
///
/// Returns `DispatchError::OutputDir` when creation fails for any reason
/// other than the directory already existing, including the case where the
/// resolved path exists but is not a directory.
pub fn ensure_output_dir(
    output_root: &Path,
    lookback_window: u32,
) -> Result<PathBuf, DispatchError> {
    let dir = resolve_output_dir(output_root, lookback_window);

    match fs::create_dir(&dir) {
        Ok(()) => {
            debug!(path = %dir.display(), "Created output directory");
            Ok(dir)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {
            debug!(path = %dir.display(), "Output directory already exists");
            Ok(dir)
        }
        Err(e) => Err(DispatchError::OutputDir {
            path: dir,
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_distinct_lookbacks_resolve_distinct_dirs() {
        let root = Path::new("data");

        assert_ne!(resolve_output_dir(root, 21), resolve_output_dir(root, 63));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let root = Path::new("data");

        assert_eq!(resolve_output_dir(root, 21), resolve_output_dir(root, 21));
        assert_eq!(output_dir_name(21), "cpd_21lbw");
    }

    #[test]
    fn test_ensure_creates_directory() {
        let root = tempdir().unwrap();

        let dir = ensure_output_dir(root.path(), 21).unwrap();

        assert!(dir.is_dir());
        assert_eq!(dir, root.path().join("cpd_21lbw"));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let root = tempdir().unwrap();

        let first = ensure_output_dir(root.path(), 21).unwrap();
        let second = ensure_output_dir(root.path(), 21).unwrap();

        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn test_ensure_rejects_file_collision() {
        let root = tempdir().unwrap();
        File::create(root.path().join("cpd_21lbw")).unwrap();

        let result = ensure_output_dir(root.path(), 21);

        assert!(matches!(result, Err(DispatchError::OutputDir { .. })));
    }

    #[test]
    fn test_ensure_fails_when_root_missing() {
        let root = tempdir().unwrap();
        let missing_root = root.path().join("does_not_exist");

        let result = ensure_output_dir(&missing_root, 21);

        assert!(matches!(result, Err(DispatchError::OutputDir { .. })));
    }
}
