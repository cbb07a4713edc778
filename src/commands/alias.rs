//! Show how a reference resolves through the configured path aliases

use anyhow::Result;

use crate::Site;

/// Print the aliases and what `reference` resolves to
pub fn run(site: &Site, reference: &str) -> Result<()> {
    for (prefix, root) in site.aliases.iter() {
        tracing::debug!("alias {} -> {:?}", prefix, root);
    }

    match site.aliases.resolve(reference) {
        Some(path) => println!("{} -> {}", reference, path.display()),
        None => {
            let path = site.aliases.resolve_or_relative(reference, &site.base_dir);
            println!("{} -> {} (no alias)", reference, path.display());
        }
    }

    Ok(())
}
