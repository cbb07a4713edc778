//! Content store scanning
//!
//! The content store is the directory of full article documents that
//! catalog entries link to. This module takes a snapshot of it so the
//! catalog can be checked against it and unreferenced documents found.

use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::links::{normalize, resolve_link, ContentStore, LinkRules};

/// Snapshot of the documents under a content root
#[derive(Debug, Clone)]
pub struct ContentIndex {
    root: PathBuf,
    documents: BTreeSet<PathBuf>,
}

impl ContentIndex {
    /// Collect every document with the given extension under `root`
    pub fn scan(root: &Path, extension: &str) -> Self {
        let root = normalize(root);
        let extension = extension.trim_start_matches('.');
        let mut documents = BTreeSet::new();

        if !root.exists() {
            tracing::warn!("Content directory {:?} does not exist", root);
        }

        for entry in WalkDir::new(&root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && has_extension(path, extension) {
                documents.insert(normalize(path));
            }
        }

        tracing::debug!("Found {} documents in {:?}", documents.len(), root);
        Self { root, documents }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Documents in path order
    pub fn documents(&self) -> impl Iterator<Item = &Path> {
        self.documents.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents that no catalog entry links to
    pub fn orphans(&self, catalog: &Catalog, rules: &LinkRules) -> Vec<&Path> {
        let linked: BTreeSet<PathBuf> = catalog
            .entries()
            .iter()
            .map(|e| resolve_link(&e.link_target, &self.root, rules))
            .collect();

        self.documents()
            .filter(|doc| !linked.contains(*doc))
            .collect()
    }
}

impl ContentStore for ContentIndex {
    fn exists(&self, path: &Path) -> bool {
        self.documents.contains(&normalize(path))
    }
}

/// Last modification time of a document
pub fn last_updated(path: &Path) -> Option<DateTime<Local>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Local>::from)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::links::validate;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("react")).unwrap();
        fs::write(root.join("react/a.mdx"), "# a").unwrap();
        fs::write(root.join("react/b.mdx"), "# b").unwrap();
        fs::write(root.join("react/notes.txt"), "").unwrap();
        fs::write(root.join("intro.mdx"), "# intro").unwrap();
        dir
    }

    #[test]
    fn test_scan_filters_extension() {
        let dir = site();
        let index = ContentIndex::scan(dir.path(), ".mdx");
        assert_eq!(index.len(), 3);
        assert!(index.documents().all(|d| d.extension().unwrap() == "mdx"));
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let index = ContentIndex::scan(&dir.path().join("missing"), "mdx");
        assert!(index.is_empty());
    }

    #[test]
    fn test_orphans() {
        let dir = site();
        let index = ContentIndex::scan(dir.path(), "mdx");
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("A", "", "", "", "/blog/react/a"),
            CatalogEntry::new("Gone", "", "", "", "/blog/react/gone"),
        ])
        .unwrap();

        let orphans = index.orphans(&catalog, &LinkRules::default());
        let names: Vec<_> = orphans
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["intro.mdx", "b.mdx"]);
    }

    #[test]
    fn test_index_as_store() {
        let dir = site();
        let index = ContentIndex::scan(dir.path(), "mdx");
        let entries = vec![
            CatalogEntry::new("A", "", "", "", "react/a"),
            CatalogEntry::new("C", "", "", "", "react/c"),
        ];
        let report = validate(&entries, index.root(), &LinkRules::default(), &index);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].title, "C");
    }

    #[test]
    fn test_last_updated() {
        let dir = site();
        assert!(last_updated(&dir.path().join("intro.mdx")).is_some());
        assert!(last_updated(&dir.path().join("nope.mdx")).is_none());
    }
}
