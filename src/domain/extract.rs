//! Tag and wiki-link extraction from raw note text.
//!
//! Both extractors work on the raw document text with no awareness of
//! markdown structure: tags inside code fences are still extracted. This is
//! an accepted limitation.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Regex for matching hashtags: `#` followed by one or more
/// non-whitespace characters.
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#(\S+)").unwrap())
}

/// Regex for wiki-links: captures the target of `[[Target]]`,
/// `[[Target|Alias]]` and `[[Target#Heading]]`, stopping at the first
/// `|`, `#` or closing `]]`.
fn wikilink_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[([^\]|#]+)[^\]]*\]\]").unwrap())
}

/// Extract all tags declared in `text`, leading `#` stripped.
///
/// Comparison against extracted tags is exact and case-sensitive, so no
/// normalization happens here.
pub fn tags(text: &str) -> BTreeSet<String> {
    tag_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Extract the raw targets of all wiki-links in `text`.
///
/// Only the target portion is returned; aliases and heading anchors are
/// dropped. Duplicates collapse to one entry. No resolution to files
/// happens here.
pub fn links(text: &str) -> BTreeSet<String> {
    wikilink_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}
