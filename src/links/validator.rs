//! Catalog link validation

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::{resolve_link, ContentStore, LinkRules};
use crate::catalog::CatalogEntry;
use crate::error::Error;

/// A catalog entry whose target has no content document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    pub title: String,
    pub link_target: String,
    pub resolved_path: PathBuf,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing article file for href {:?} ({}): expected file at {:?}",
            self.link_target, self.title, self.resolved_path
        )
    }
}

/// Every broken link found in one validation pass, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub violations: Vec<BrokenLink>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Turn a report with violations into a single aggregate error
    pub fn into_result(self) -> Result<usize, Error> {
        if self.is_ok() {
            Ok(self.checked)
        } else {
            Err(Error::BrokenLinks(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} catalog links are broken",
            self.violations.len(),
            self.checked
        )?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

/// Check that every entry's link target resolves to a document in `store`
///
/// All entries are checked; the report lists every violation rather than
/// stopping at the first.
pub fn validate(
    entries: &[CatalogEntry],
    content_root: &Path,
    rules: &LinkRules,
    store: &dyn ContentStore,
) -> ValidationReport {
    let violations = entries
        .iter()
        .filter_map(|entry| {
            let resolved_path = resolve_link(&entry.link_target, content_root, rules);
            if store.exists(&resolved_path) {
                tracing::debug!("{} -> {:?}", entry.link_target, resolved_path);
                None
            } else {
                tracing::debug!("Broken link {} -> {:?}", entry.link_target, resolved_path);
                Some(BrokenLink {
                    title: entry.title.clone(),
                    link_target: entry.link_target.clone(),
                    resolved_path,
                })
            }
        })
        .collect();

    ValidationReport {
        checked: entries.len(),
        violations,
    }
}
