//! Store path conventions and discovery

use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};

/// Default store directory name
pub const DEFAULT_STORE_DIR: &str = ".folio";

/// Config file name inside the store root
pub const CONFIG_FILE: &str = "config.toml";

/// Discover a store by walking up from the given directory
pub fn discover_store(start: &Path) -> Result<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let candidate = dir.join(DEFAULT_STORE_DIR);
        if candidate.is_dir() {
            return Ok(candidate);
        }
        current = dir.parent();
    }

    Err(FolioError::StoreNotFound {
        search_root: start.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_discover_finds_store_in_parent() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(DEFAULT_STORE_DIR)).unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = discover_store(&nested).unwrap();
        assert_eq!(found, dir.path().join(DEFAULT_STORE_DIR));
    }

    #[test]
    fn test_discover_errors_without_store() {
        let dir = tempdir().unwrap();
        let err = discover_store(dir.path()).unwrap_err();
        assert!(matches!(err, FolioError::StoreNotFound { .. }));
    }
}
