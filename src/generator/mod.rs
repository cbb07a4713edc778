//! Generator module - renders the home page from the catalog

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::BrokenLinkPolicy;
use crate::error::Error;
use crate::helpers::{full_url_for, url_for};
use crate::links::ValidationReport;
use crate::templates::{CardData, HeroData, RowData, SiteData, TemplateRenderer};
use crate::Site;

/// Static home page generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Check the catalog, then write `index.html` and `catalog.json`
    pub fn generate(&self, catalog: &Catalog) -> Result<PathBuf> {
        let report = self.site.check(catalog);
        self.apply_policy(report)?;

        fs::create_dir_all(&self.site.public_dir)?;

        let html = self.render_home(catalog)?;
        let index_path = self.site.public_dir.join("index.html");
        fs::write(&index_path, html)?;
        tracing::debug!("Wrote {:?}", index_path);

        let json = serde_json::to_string_pretty(catalog.entries())?;
        let catalog_path = self.site.public_dir.join("catalog.json");
        fs::write(&catalog_path, json)?;
        tracing::debug!("Wrote {:?}", catalog_path);

        Ok(index_path)
    }

    /// Decide what a broken catalog link means for this build
    fn apply_policy(&self, report: ValidationReport) -> Result<()> {
        if report.is_ok() {
            return Ok(());
        }

        match self.site.config.on_broken_links {
            BrokenLinkPolicy::Throw => Err(Error::BrokenLinks(report).into()),
            BrokenLinkPolicy::Warn => {
                for violation in &report.violations {
                    tracing::warn!("{}", violation);
                }
                Ok(())
            }
            BrokenLinkPolicy::Ignore => {
                tracing::debug!("Ignoring {} broken links", report.violations.len());
                Ok(())
            }
        }
    }

    /// Render the home page: hero plus the two marquee rows
    pub fn render_home(&self, catalog: &Catalog) -> Result<String> {
        let config = &self.site.config;
        let (first, second) = catalog.rows();

        let site = SiteData {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            root: config.root.clone(),
            url: config.url.clone(),
        };
        let hero = HeroData {
            title: config.hero.title.clone(),
            subtitle: config.hero.subtitle.clone(),
        };
        let rows = vec![self.build_row(first, false), self.build_row(second, true)];

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("hero", &hero);
        context.insert("rows", &rows);
        context.insert("canonical", &full_url_for(&config.url, &config.root, ""));

        self.renderer.render("index.html", &context)
    }

    fn build_row(&self, entries: &[CatalogEntry], reverse: bool) -> RowData {
        let config = &self.site.config;
        RowData {
            reverse,
            pause_on_hover: config.marquee.pause_on_hover,
            duration: config.marquee.duration.clone(),
            cards: entries.iter().map(|e| self.build_card(e)).collect(),
        }
    }

    fn build_card(&self, entry: &CatalogEntry) -> CardData {
        let root = &self.site.config.root;
        CardData {
            id: slug::slugify(&entry.title),
            title: entry.title.clone(),
            tags: entry.tags.clone(),
            description: entry.description.clone(),
            img: url_for(root, &entry.image_ref),
            href: url_for(root, &entry.link_target),
        }
    }
}
