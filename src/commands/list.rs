//! List catalog information

use anyhow::Result;

use crate::catalog::CatalogEntry;
use crate::content::{last_updated, ContentIndex};
use crate::links::resolve_link;
use crate::Site;

/// List catalog content by type
pub fn run(site: &Site, list_type: &str) -> Result<()> {
    let catalog = site.load_catalog()?;

    match list_type {
        "entry" | "entries" => {
            println!("Entries ({}):", catalog.len());
            for entry in catalog.entries() {
                println!("  {}", describe(site, entry));
            }
        }
        "row" | "rows" => {
            let (first, second) = catalog.rows();
            for (name, row) in [("First row", first), ("Second row (reversed)", second)] {
                println!("{} ({}):", name, row.len());
                for entry in row {
                    println!("  {}", entry.title);
                }
            }
        }
        "tag" | "tags" => {
            let index = catalog.tag_index();
            println!("Tags ({}):", index.len());
            for (tag, entries) in &index {
                println!("  {} [{}] ({})", tag, slug::slugify(tag), entries.len());
            }
        }
        "orphan" | "orphans" => {
            let index = ContentIndex::scan(&site.content_dir, &site.config.content_ext);
            let orphans = index.orphans(&catalog, &site.link_rules());
            println!(
                "Documents not in the catalog ({} of {}):",
                orphans.len(),
                index.len()
            );
            for doc in orphans {
                let relative = doc.strip_prefix(index.root()).unwrap_or(doc);
                println!("  {}", relative.display());
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: entries, rows, tags, orphans",
                list_type
            );
        }
    }

    Ok(())
}

/// One line per entry: update date, title, tags and link
fn describe(site: &Site, entry: &CatalogEntry) -> String {
    let document = resolve_link(&entry.link_target, &site.content_dir, &site.link_rules());
    let updated = last_updated(&document)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "missing".to_string());

    format!(
        "{} - {} ({}) [{}]",
        updated, entry.title, entry.tags, entry.link_target
    )
}
