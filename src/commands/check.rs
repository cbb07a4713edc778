//! Check catalog links against the content directory

use anyhow::Result;

use crate::links::resolve_link;
use crate::Site;

/// How the check result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validate every catalog link; fails when any link is broken
///
/// The `on_broken_links` policy does not apply here: a check always fails
/// on a broken link.
pub fn run(site: &Site, format: OutputFormat, explain: bool) -> Result<()> {
    let catalog = site.load_catalog()?;
    let rules = site.link_rules();

    if explain {
        for entry in catalog.entries() {
            let resolved = resolve_link(&entry.link_target, &site.content_dir, &rules);
            println!("  {} -> {}", entry.link_target, resolved.display());
        }
    }

    let report = site.check(&catalog);

    match format {
        OutputFormat::Text => {
            if report.is_ok() {
                println!("All {} catalog links resolve.", report.checked);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    let checked = report.into_result()?;
    tracing::info!("Checked {} links in {:?}", checked, site.content_dir);

    Ok(())
}
