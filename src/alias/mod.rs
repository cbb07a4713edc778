//! Path aliases: import-path prefixes that resolve against a fixed root
//!
//! A reference matches alias `P` when it is exactly `P` or starts with
//! `P/`. The longest matching alias wins. References that match no alias
//! fall through to normal resolution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::links::normalize;

/// Prefix to root mapping
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    /// Sorted by descending prefix length
    aliases: Vec<(String, PathBuf)>,
}

impl AliasTable {
    /// Build the table from config; relative roots are taken from `base_dir`
    pub fn from_config(base_dir: &Path, aliases: &HashMap<String, String>) -> Self {
        let mut table = Self::default();
        for (prefix, root) in aliases {
            table.insert(prefix, base_dir.join(root));
        }
        table
    }

    /// Add or replace an alias
    pub fn insert<P: Into<PathBuf>>(&mut self, prefix: &str, root: P) {
        let prefix = prefix.trim_end_matches('/').to_string();
        let root = normalize(&root.into());

        self.aliases.retain(|(p, _)| *p != prefix);
        self.aliases.push((prefix, root));
        self.aliases
            .sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    }

    /// Resolve a reference through the matching alias, if any
    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        self.aliases.iter().find_map(|(prefix, root)| {
            let rest = reference.strip_prefix(prefix.as_str())?;
            if rest.is_empty() {
                Some(root.clone())
            } else {
                let rest = rest.strip_prefix('/')?;
                Some(normalize(&root.join(rest)))
            }
        })
    }

    /// Resolve through an alias, falling back to `base` for plain paths
    pub fn resolve_or_relative(&self, reference: &str, base: &Path) -> PathBuf {
        self.resolve(reference)
            .unwrap_or_else(|| normalize(&base.join(reference)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.aliases.iter().map(|(p, r)| (p.as_str(), r.as_path()))
    }
}
