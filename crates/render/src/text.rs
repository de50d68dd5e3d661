//! Pure text transforms: escaping and tag casing.

use crate::config::TagCasing;

/// Escapes markup-significant characters after trimming surrounding
/// whitespace, so whitespace-only input becomes empty.
///
/// Each source character is replaced at most once (the single pass is
/// equivalent to sequential replacement with `&` handled first), so
/// entities already present in the input escape their ampersand rather
/// than being re-escaped. This is the only sanitization applied to tag
/// names and content.
pub fn escape_text(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Applies the configured casing to an already-escaped tag name.
pub fn apply_casing(tag: &str, mode: TagCasing) -> String {
    match mode {
        TagCasing::AsIs => tag.to_string(),
        TagCasing::Upper => tag.to_uppercase(),
        TagCasing::Lower => tag.to_lowercase(),
    }
}
