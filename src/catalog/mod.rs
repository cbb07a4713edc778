//! Content catalog - the ordered list of promoted articles
//!
//! The catalog is built once per invocation, either from the table compiled
//! into the binary or from a YAML file, and is read-only afterwards. Its
//! order is the display order of the home page.

mod builtin;
mod entry;

use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub use entry::CatalogEntry;

use crate::error::{Error, Result};

/// Ordered, immutable list of catalog entries with unique titles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate titles
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.title.as_str()) {
                return Err(Error::DuplicateTitle(entry.title.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        let entries = builtin::ARTICLES
            .iter()
            .map(|&(title, tags, description, img, href)| {
                CatalogEntry::new(title, tags, description, img, href)
            })
            .collect();
        Self { entries }
    }

    /// Load a catalog from a YAML sequence of entries
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<CatalogEntry> =
            serde_yaml::from_str(&content).map_err(|source| Error::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded {} catalog entries from {:?}", entries.len(), path);
        Self::from_entries(entries)
    }

    /// All entries in authored order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The two marquee rows for the home page
    pub fn rows(&self) -> (&[CatalogEntry], &[CatalogEntry]) {
        split_for_display(&self.entries)
    }

    /// Tags in first-seen order, each with the entries carrying it
    pub fn tag_index(&self) -> IndexMap<String, Vec<&CatalogEntry>> {
        let mut index: IndexMap<String, Vec<&CatalogEntry>> = IndexMap::new();
        for entry in &self.entries {
            for tag in entry.tag_list() {
                index.entry(tag.to_string()).or_default().push(entry);
            }
        }
        index
    }
}

/// Split entries at the midpoint; the first half gets `len / 2` entries
pub fn split_for_display<T>(entries: &[T]) -> (&[T], &[T]) {
    entries.split_at(entries.len() / 2)
}
