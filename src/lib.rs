//! blog-catalog: the promoted-article catalog of a static blog
//!
//! This crate holds the ordered list of articles shown on the home page,
//! checks that every entry links to an existing content document, and
//! renders the home page's two marquee rows from it.

pub mod alias;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod links;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::Error;

/// The main site application
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (article documents) directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Catalog file, if the site does not use the built-in table
    pub catalog_path: Option<PathBuf>,
    /// Path aliases from the config
    pub aliases: alias::AliasTable,
}

impl Site {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let aliases = alias::AliasTable::from_config(&base_dir, &config.aliases);

        let content_dir = aliases.resolve_or_relative(&config.content_dir, &base_dir);
        let public_dir = aliases.resolve_or_relative(&config.public_dir, &base_dir);
        let catalog_path = config
            .catalog
            .as_deref()
            .map(|c| aliases.resolve_or_relative(c, &base_dir));

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            catalog_path,
            aliases,
        }
    }

    /// Load the catalog this site is configured with
    pub fn load_catalog(&self) -> Result<catalog::Catalog> {
        match &self.catalog_path {
            Some(path) => Ok(catalog::Catalog::load(path)?),
            None => Ok(catalog::Catalog::builtin()),
        }
    }

    /// Link resolution rules from the config
    pub fn link_rules(&self) -> links::LinkRules {
        links::LinkRules::new(&self.config.route_prefix, &self.config.content_ext)
    }

    /// Check every catalog link against the content directory
    pub fn check(&self, catalog: &catalog::Catalog) -> links::ValidationReport {
        links::validate(
            catalog.entries(),
            &self.content_dir,
            &self.link_rules(),
            &links::DiskStore,
        )
    }

    /// Generate the home page
    pub fn generate(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
