//! Build the home page

use anyhow::Result;
use notify_debouncer_mini::new_debouncer;
use notify_debouncer_mini::notify::{RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Site;

/// Generate the home page
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let catalog = site.load_catalog()?;
    tracing::info!("Loaded {} catalog entries", catalog.len());

    let generator = Generator::new(site)?;
    let index = generator.generate(&catalog)?;

    let duration = start.elapsed();
    tracing::info!("Generated {:?} in {:.2}s", index, duration.as_secs_f64());

    Ok(())
}

/// Paths whose changes trigger a rebuild
fn watched_paths(site: &Site) -> Vec<(PathBuf, RecursiveMode)> {
    let mut paths = vec![
        (site.base_dir.join("_config.yml"), RecursiveMode::NonRecursive),
        (site.content_dir.clone(), RecursiveMode::Recursive),
    ];
    if let Some(catalog) = &site.catalog_path {
        paths.push((catalog.clone(), RecursiveMode::NonRecursive));
    }
    paths
}

/// Paths to stop and start watching so that exactly `desired` is watched
///
/// Paths that do not exist yet are skipped; they are picked up on a later
/// rebuild once they appear.
fn watch_plan(
    registered: &[PathBuf],
    desired: &[(PathBuf, RecursiveMode)],
) -> (Vec<PathBuf>, Vec<(PathBuf, RecursiveMode)>) {
    let to_unwatch = registered
        .iter()
        .filter(|p| !desired.iter().any(|(d, _)| d == *p))
        .cloned()
        .collect();
    let to_watch = desired
        .iter()
        .filter(|(d, _)| !registered.contains(d) && d.exists())
        .cloned()
        .collect();
    (to_unwatch, to_watch)
}

/// Bring the watcher in line with the paths `site` depends on
fn rewatch(watcher: &mut dyn Watcher, registered: &mut Vec<PathBuf>, site: &Site) -> Result<()> {
    let (to_unwatch, to_watch) = watch_plan(registered, &watched_paths(site));

    for path in to_unwatch {
        if let Err(e) = watcher.unwatch(&path) {
            tracing::debug!("Unwatch {:?}: {}", path, e);
        }
        tracing::debug!("Stopped watching: {:?}", path);
        registered.retain(|p| *p != path);
    }

    for (path, mode) in to_watch {
        watcher.watch(&path, mode)?;
        tracing::debug!("Watching: {:?}", path);
        registered.push(path);
    }

    Ok(())
}

/// Watch for changes and rebuild until the watcher shuts down
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    let mut current = site.clone();
    let mut registered = Vec::new();
    rewatch(debouncer.watcher(), &mut registered, &current)?;

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| is_relevant(&e.path, &current.public_dir))
                    .collect();

                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // The config may have moved the content dir or the catalog
                match Site::new(&current.base_dir) {
                    Ok(site) => {
                        current = site;
                        if let Err(e) = rewatch(debouncer.watcher(), &mut registered, &current) {
                            tracing::error!("Watch error: {:#}", e);
                        }
                        if let Err(e) = run(&current) {
                            tracing::error!("Build failed: {:#}", e);
                        }
                    }
                    Err(e) => tracing::error!("Failed to load config: {:#}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

fn is_relevant(path: &Path, public_dir: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path.starts_with(public_dir)
        && !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_with_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "catalog: catalog.yml\npublic_dir: out\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("catalog.yml"),
            "- title: Only\n  href: /blog/only\n  img: only.svg\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("articles")).unwrap();
        fs::write(dir.path().join("articles/only.mdx"), "").unwrap();

        let site = Site::new(dir.path()).unwrap();
        run(&site).unwrap();

        let html = fs::read_to_string(dir.path().join("out/index.html")).unwrap();
        assert!(html.contains("/blogs/blog/only"));
    }

    #[test]
    fn test_build_fails_on_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "catalog: missing.yml\n").unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site).is_err());
    }

    #[test]
    fn test_watched_paths() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(watched_paths(&site).len(), 2);
    }

    #[test]
    fn test_watch_plan_follows_config_changes() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("articles")).unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Watched\n").unwrap();

        let before = Site::new(dir.path()).unwrap();
        let (unwatch, watch) = watch_plan(&[], &watched_paths(&before));
        assert!(unwatch.is_empty());
        let registered: Vec<PathBuf> = watch.into_iter().map(|(p, _)| p).collect();
        assert!(registered.contains(&dir.path().join("articles")));

        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: posts\ncatalog: catalog.yml\n",
        )
        .unwrap();
        fs::write(dir.path().join("catalog.yml"), "[]\n").unwrap();
        let after = Site::new(dir.path()).unwrap();

        let (unwatch, watch) = watch_plan(&registered, &watched_paths(&after));
        assert_eq!(unwatch, vec![dir.path().join("articles")]);
        let watch: Vec<PathBuf> = watch.into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            watch,
            vec![dir.path().join("posts"), dir.path().join("catalog.yml")]
        );
    }

    #[test]
    fn test_watch_plan_skips_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let (_, watch) = watch_plan(&[], &watched_paths(&site));
        assert!(watch.is_empty());
    }

    #[test]
    fn test_is_relevant() {
        let public = Path::new("/site/public");
        assert!(is_relevant(Path::new("/site/articles/a.mdx"), public));
        assert!(!is_relevant(Path::new("/site/public/index.html"), public));
        assert!(!is_relevant(Path::new("/site/articles/a.mdx~"), public));
    }
}
