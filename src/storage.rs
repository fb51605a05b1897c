// src/storage.rs
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Scratch directory for transient client data left behind by earlier
/// runs. Cleared once at startup, before the form becomes interactive.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Removes every entry under the scratch root, creating the root
    /// if it does not exist yet. Returns the number of entries removed.
    pub fn clear(&self) -> anyhow::Result<usize> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)
                .with_context(|| format!("failed to create {}", self.root.display()))?;
            return Ok(0);
        }

        let mut removed = 0;
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("failed to read {}", self.root.display()))?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            }
            .with_context(|| format!("failed to remove {}", path.display()))?;

            removed += 1;
        }

        info!(
            "cleared {} entries from scratch store {}",
            removed,
            self.root.display()
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!(
            "signup-cli-test-{}-{}",
            std::process::id(),
            DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
        ))
    }

    #[test]
    fn clear_creates_missing_root() {
        let dir = scratch_dir();
        let store = LocalStore::new(&dir);

        assert_eq!(store.clear().unwrap(), 0);
        assert!(dir.is_dir());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn clear_removes_files_and_subdirectories() {
        let dir = scratch_dir();
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("draft.json"), b"{}").unwrap();
        fs::write(dir.join("nested/cache.bin"), b"stale").unwrap();

        let store = LocalStore::new(&dir);
        assert_eq!(store.clear().unwrap(), 2);
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

        fs::remove_dir_all(&dir).unwrap();
    }
}
