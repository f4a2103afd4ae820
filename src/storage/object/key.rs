//! Object key derivation and content-type helpers

use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_-]+").expect("Invalid slug regex"));

const MAX_SLUG_LEN: usize = 60;

/// Turn a prompt into a key-safe slug
///
/// Lowercases, collapses every run of characters outside `[a-z0-9_-]` into a
/// single `-`, trims leading and trailing `-`, and cuts the result to 60
/// characters. Falls back to `image` when nothing survives.
pub fn slugify(prompt: &str) -> String {
    let lowered = prompt.to_lowercase();
    let replaced = UNSAFE_RUN.replace_all(&lowered, "-");
    let slug: String = replaced.trim_matches('-').chars().take(MAX_SLUG_LEN).collect();
    if slug.is_empty() {
        "image".to_string()
    } else {
        slug
    }
}

/// File extension for a content type
pub fn extension_for(content_type: &str) -> &'static str {
    if content_type.contains("png") {
        "png"
    } else if content_type.contains("jpeg") {
        "jpg"
    } else {
        "bin"
    }
}

/// Key under which a mirrored image is stored: `{prefix}/{slug}-{timestamp_ms}.{ext}`
pub fn object_key(prefix: &str, prompt: &str, content_type: &str, timestamp_ms: i64) -> String {
    let prefix = prefix.trim_matches('/');
    let name = format!(
        "{}-{}.{}",
        slugify(prompt),
        timestamp_ms,
        extension_for(content_type)
    );
    if prefix.is_empty() {
        name
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Guess an image content type from its leading bytes
pub fn sniff_content_type(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}
