//! Link target resolution: route -> content document path

use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// How link targets map onto content documents
#[derive(Debug, Clone)]
pub struct LinkRules {
    route_prefix: Option<Regex>,
    extension: String,
}

impl LinkRules {
    /// Create rules for a route prefix (e.g. `/blog`) and a document extension
    pub fn new(route_prefix: &str, extension: &str) -> Self {
        let prefix = route_prefix.trim_end_matches('/');
        // The prefix only counts as a whole leading segment
        let route_prefix = if prefix.is_empty() {
            None
        } else {
            Regex::new(&format!("^{}(?:/|$)", regex::escape(prefix))).ok()
        };

        Self {
            route_prefix,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Route relative to the content root: separators as `/`, prefix removed
    pub fn strip_route(&self, link_target: &str) -> String {
        let target = link_target.replace('\\', "/");

        let route = match &self.route_prefix {
            Some(re) => match re.find(&target) {
                Some(m) => &target[m.end()..],
                None => &target,
            },
            None => &target,
        };

        // A leading `/` would make the join replace the content root
        route.trim_start_matches('/').to_string()
    }
}

impl Default for LinkRules {
    fn default() -> Self {
        Self::new("/blog", "mdx")
    }
}

/// Resolve a link target to the path its content document must live at
pub fn resolve_link(link_target: &str, content_root: &Path, rules: &LinkRules) -> PathBuf {
    let route = rules.strip_route(link_target);
    let document = format!("{}.{}", route, rules.extension);
    normalize(&content_root.join(document))
}

/// Lexically normalize a path: drop `.`, pop on `..`, collapse separators
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let poppable = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if poppable {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_and_bare_targets_match() {
        let rules = LinkRules::default();
        let root = Path::new("/site/articles");
        assert_eq!(
            resolve_link("/blog/x", root, &rules),
            resolve_link("x", root, &rules)
        );
        assert_eq!(
            resolve_link("/blog/x", root, &rules),
            PathBuf::from("/site/articles/x.mdx")
        );
    }

    #[test]
    fn test_prefix_without_trailing_slash() {
        let rules = LinkRules::default();
        assert_eq!(rules.strip_route("/blogreact/x"), "blogreact/x");
        assert_eq!(rules.strip_route("/blog"), "");
        assert_eq!(rules.strip_route("/blog/"), "");
        assert_eq!(rules.strip_route("blog/x"), "blog/x");
    }

    #[test]
    fn test_bare_prefix_keeps_empty_name() {
        let rules = LinkRules::default();
        assert_eq!(
            resolve_link("/blog", Path::new("articles"), &rules),
            PathBuf::from("articles/.mdx")
        );
        assert_eq!(
            resolve_link("/blog/react/", Path::new("articles"), &rules),
            PathBuf::from("articles/react/.mdx")
        );
    }

    #[test]
    fn test_query_and_fragment_kept() {
        let rules = LinkRules::default();
        let root = Path::new("articles");
        assert_eq!(
            resolve_link("/blog/x#frag", root, &rules),
            PathBuf::from("articles/x#frag.mdx")
        );
        assert_eq!(
            resolve_link("react/a?tab=1", root, &rules),
            PathBuf::from("articles/react/a?tab=1.mdx")
        );
    }

    #[test]
    fn test_separators_normalized() {
        let rules = LinkRules::default();
        let root = Path::new("articles");
        assert_eq!(
            resolve_link("react\\nested//./a", root, &rules),
            PathBuf::from("articles/react/nested/a.mdx")
        );
        assert_eq!(
            resolve_link("/blog/react/../infra/vite", root, &rules),
            PathBuf::from("articles/infra/vite.mdx")
        );
    }

    #[test]
    fn test_backslash_prefix_stripped() {
        let rules = LinkRules::default();
        let root = Path::new("articles");
        assert_eq!(
            resolve_link("\\blog\\x", root, &rules),
            resolve_link("/blog/x", root, &rules)
        );
        assert_eq!(
            resolve_link("\\blog\\x", root, &rules),
            PathBuf::from("articles/x.mdx")
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = LinkRules::new("/docs/", ".md");
        assert_eq!(rules.extension(), "md");
        assert_eq!(
            resolve_link("/docs/guide", Path::new("content"), &rules),
            PathBuf::from("content/guide.md")
        );
    }

    #[test]
    fn test_empty_prefix_keeps_target() {
        let rules = LinkRules::new("", "mdx");
        assert_eq!(rules.strip_route("/blog/x"), "blog/x");
    }

    #[test]
    fn test_normalize_relative_parent() {
        assert_eq!(normalize(Path::new("../a/./b/..")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }
}
