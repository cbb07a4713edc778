//! Built-in home page templates using Tera template engine
//!
//! The templates are embedded in the binary, so a build needs nothing but
//! the site config, the catalog and the content directory.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded home page templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Catalog text is escaped; URLs are encoded by the url helpers
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("home/layout.html")),
            ("index.html", include_str!("home/index.html")),
            ("partials/hero.html", include_str!("home/partials/hero.html")),
            (
                "partials/marquee.html",
                include_str!("home/partials/marquee.html"),
            ),
            ("partials/card.html", include_str!("home/partials/card.html")),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 120,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "…".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub tagline: String,
    pub root: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroData {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub id: String,
    pub title: String,
    pub tags: String,
    pub description: String,
    pub img: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowData {
    pub reverse: bool,
    pub pause_on_hover: bool,
    pub duration: String,
    pub cards: Vec<CardData>,
}
