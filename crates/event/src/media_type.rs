//! Media type helpers.
//!
//! Comparisons work on the media type essence: parameters such as
//! `; charset=utf-8` are dropped and the remainder is ASCII-lowercased.

/// Returns `type/subtype` without parameters, trimmed and lowercased.
pub fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// `application/json`, `text/json` or any `+json` structured syntax suffix.
pub fn is_json(media_type: &str) -> bool {
    let essence = essence(media_type);
    essence == "application/json" || essence == "text/json" || essence.ends_with("+json")
}

/// Textual payloads: `text/*`, `application/xml` and `+xml` suffixes.
pub fn is_text(media_type: &str) -> bool {
    let essence = essence(media_type);
    essence.starts_with("text/") || essence == "application/xml" || essence.ends_with("+xml")
}
