use crate::domain::ports::FileProbe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// A probe backed by an in-memory set of readable paths.
///
/// Clones share the same set, so a test can keep a handle after boxing one copy
/// into a builder. Useful for dry runs where the files live elsewhere.
#[derive(Default, Clone)]
pub struct InMemoryFileSystem {
    files: Arc<RwLock<HashSet<PathBuf>>>,
}

impl InMemoryFileSystem {
    /// Creates a new, empty probe. Every path is rejected until inserted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let probe = Self::new();
        for path in paths {
            probe.insert(path);
        }
        probe
    }

    pub fn insert(&self, path: impl Into<PathBuf>) {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.into());
    }

    pub fn remove(&self, path: &Path) -> bool {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.remove(path)
    }
}

impl FileProbe for InMemoryFileSystem {
    fn is_openable(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.contains(path)
    }
}
