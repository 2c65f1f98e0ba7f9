use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::metadata::Metadata;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static META_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());
static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s(property|name|content)\s*=\s*"([^"]*)""#).unwrap());

/// Pull link-preview metadata out of a raw HTML document.
///
/// Each field comes from the first matching tag in document order and is
/// extracted independently of the others. Never fails: empty or malformed
/// input yields a record with every field absent.
pub fn extract(html: &str) -> Metadata {
    let meta = Metadata {
        url: meta_content(html, "property", "og:url"),
        site_name: meta_content(html, "property", "og:site_name"),
        title: title(html),
        description: meta_content(html, "property", "og:description")
            .or_else(|| meta_content(html, "name", "description")),
        keywords: keywords(html),
        author: meta_content(html, "name", "author"),
    };
    debug!(title = ?meta.title, url = ?meta.url, "extracted metadata");
    meta
}

/// Inner text of the first `<title>` element; spans newlines.
fn title(html: &str) -> Option<String> {
    TITLE_RE.captures(html).map(|caps| caps[1].to_string())
}

/// Content attribute of the first meta tag whose `key` attribute equals
/// `value`. Attribute order within the tag does not matter.
fn meta_content(html: &str, key: &str, value: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|tag| {
        let mut key_matched = false;
        let mut content = None;
        for caps in ATTR_RE.captures_iter(tag.as_str()) {
            match caps[1].to_ascii_lowercase().as_str() {
                "content" => {
                    if content.is_none() {
                        content = Some(caps[2].to_string());
                    }
                }
                k if k == key && caps[2].eq_ignore_ascii_case(value) => key_matched = true,
                _ => {}
            }
        }
        if key_matched {
            content
        } else {
            None
        }
    })
}

/// Keyword list from `<meta name="keywords">`: comma-split, trimmed, empty
/// entries dropped. `None` when the tag is missing or yields no entries.
fn keywords(html: &str) -> Option<Vec<String>> {
    let content = meta_content(html, "name", "keywords")?;
    let list: Vec<String> = content
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect();
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}
