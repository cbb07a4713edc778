//! Content store access used by the validator

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::normalize;

/// Read-only view of the documents available to the site
pub trait ContentStore {
    /// Whether a document exists at `path`
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl ContentStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// A fixed set of document paths
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeSet<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; the path is normalized first
    pub fn insert<P: AsRef<Path>>(&mut self, path: P) {
        self.documents.insert(normalize(path.as_ref()));
    }
}

impl<P: AsRef<Path>> FromIterator<P> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut store = Self::new();
        for path in iter {
            store.insert(path);
        }
        store
    }
}

impl ContentStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.documents.contains(&normalize(path))
    }
}
