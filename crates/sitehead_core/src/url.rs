use crate::defaults::RTL_LANGUAGES;
use crate::model::TextDirection;

/// True when `value` starts with a URI scheme (`https:`, `mailto:`, ...).
pub fn is_absolute_url(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}

/// Joins a site-relative path onto `origin` with exactly one `/` at the join
/// point. Absolute values are returned verbatim; protocol-relative values
/// (`//cdn.example.com/x`) take the origin's scheme.
pub fn join_origin(origin: &str, path: &str) -> String {
    let path = path.trim();
    if is_absolute_url(path) {
        return path.to_string();
    }
    if let Some(rest) = path.strip_prefix("//") {
        let scheme = origin.split_once("://").map(|(scheme, _)| scheme).unwrap_or("https");
        return format!("{scheme}://{rest}");
    }
    let base = origin.trim_end_matches('/');
    let rel = path.trim_start_matches('/');
    format!("{base}/{rel}")
}

pub fn direction_for_language(language: &str) -> TextDirection {
    let primary = language
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    if RTL_LANGUAGES.contains(&primary.as_str()) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

/// Maps a page source path (relative to the pages directory) to the request
/// path it is served under.
pub fn request_path_for_source(source_path: &str) -> String {
    let normalized = source_path.replace('\\', "/");
    let trimmed = normalized.trim_matches('/');
    let without_ext = trimmed
        .strip_suffix(".md")
        .or_else(|| trimmed.strip_suffix(".markdown"))
        .unwrap_or(trimmed);
    let logical = if without_ext == "index" {
        ""
    } else {
        without_ext.strip_suffix("/index").unwrap_or(without_ext)
    };
    format!("/{logical}")
}
