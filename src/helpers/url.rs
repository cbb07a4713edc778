//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a URL path
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Whether a reference points off-site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Generate a URL under the site root
///
/// # Examples
/// ```ignore
/// url_for("/blogs/", "/blog/react/a") // -> "/blogs/blog/react/a"
/// url_for("/blogs/", "https://x.dev/a b.svg") // -> "https://x.dev/a%20b.svg"
/// ```
pub fn url_for(root: &str, path: &str) -> String {
    if is_external(path) {
        return encode_path(path);
    }

    let root = root.trim_end_matches('/');
    let path = encode_path(path.trim_start_matches('/'));

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(url: &str, root: &str, path: &str) -> String {
    if is_external(path) {
        return encode_path(path);
    }
    format!("{}{}", url.trim_end_matches('/'), url_for(root, path))
}

/// Percent-encode a URL path, keeping `/` and other reserved characters
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        assert_eq!(url_for("/blogs/", "/blog/react/a"), "/blogs/blog/react/a");
        assert_eq!(url_for("/blogs", "techstack/ts.svg"), "/blogs/techstack/ts.svg");
        assert_eq!(url_for("/", "/blog/x"), "/blog/x");
        assert_eq!(url_for("/blogs/", ""), "/blogs/");
    }

    #[test]
    fn test_url_for_external() {
        assert_eq!(
            url_for("/blogs/", "https://example.com/a.svg"),
            "https://example.com/a.svg"
        );
    }

    #[test]
    fn test_url_for_external_cannot_close_attribute() {
        let url = url_for("/", r#"https://x.dev/a.svg" onerror="alert(1)"#);
        assert_eq!(url, "https://x.dev/a.svg%22%20onerror=%22alert(1)");
        assert!(!url.contains('"'));
    }

    #[test]
    fn test_url_for_encodes() {
        assert_eq!(url_for("/", "my post/a b"), "/my%20post/a%20b");
    }

    #[test]
    fn test_full_url_for() {
        assert_eq!(
            full_url_for("https://example.com/", "/blogs/", "/blog/x"),
            "https://example.com/blogs/blog/x"
        );
    }
}
