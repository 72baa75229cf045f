//! Resolution of wiki-link targets to vault paths.
//!
//! A target is a short name as written inside `[[...]]`; vault paths are
//! `/`-normalized paths relative to the vault root. Resolution is a
//! two-tier match:
//!
//! 1. Exact tier: paths whose tail segment equals `<target>.md` (also
//!    matches multi-segment targets like `folder/Note`).
//! 2. Substring tier: paths containing `<target>.md` anywhere, used only
//!    when the exact tier is empty.
//!
//! Every match within the winning tier is returned; zero matches means the
//! link is simply not followed.

/// Resolve `target` against the vault's path list.
pub fn resolve<'a>(target: &str, paths: &'a [String]) -> Vec<&'a String> {
    let wanted = format!("{}.md", target);
    let tail = format!("/{}", wanted);

    let exact: Vec<&String> = paths
        .iter()
        .filter(|p| *p == &wanted || p.ends_with(&tail))
        .collect();

    if !exact.is_empty() {
        return exact;
    }

    paths.iter().filter(|p| p.contains(&wanted)).collect()
}
