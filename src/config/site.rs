//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,

    // URL
    pub url: String,
    pub root: String,

    // Content
    pub content_dir: String,
    pub content_ext: String,
    pub route_prefix: String,
    /// YAML catalog file; the built-in table is used when unset
    pub catalog: Option<String>,
    pub on_broken_links: BrokenLinkPolicy,

    // Output
    pub public_dir: String,

    // Build
    pub aliases: HashMap<String, String>,

    // Home page
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut aliases = HashMap::new();
        aliases.insert("@".to_string(), "src".to_string());

        Self {
            title: "Huang-Yu".to_string(),
            tagline: String::new(),

            url: "http://example.com".to_string(),
            root: "/blogs/".to_string(),

            content_dir: "articles".to_string(),
            content_ext: "mdx".to_string(),
            route_prefix: "/blog".to_string(),
            catalog: None,
            on_broken_links: BrokenLinkPolicy::Throw,

            public_dir: "public".to_string(),

            aliases,

            hero: HeroConfig::default(),
            marquee: MarqueeConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// What a build does when catalog links are broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build
    #[default]
    Throw,
    /// Log each broken link and continue
    Warn,
    /// Continue silently
    Ignore,
}

/// Hero banner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Huang Yu - Blog".to_string(),
            subtitle: "Hi 👋, I'm Web Developer from Taiwan 🇹🇼".to_string(),
        }
    }
}

/// Marquee rows configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// CSS duration of one scroll cycle
    pub duration: String,
    pub pause_on_hover: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            duration: "20s".to_string(),
            pause_on_hover: true,
        }
    }
}
