//! Whitespace and caption normalization.

use crate::config::CAPTION_PARENTHESES;

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Full-width spaces (U+3000) count as whitespace.
///
/// # Examples
/// ```
/// use keiho_converter::text::normalize_text;
///
/// assert_eq!(normalize_text("　これは　テスト\n です。"), "これは テスト です。");
/// assert_eq!(normalize_text(" \t\n"), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a caption and strip one pair of enclosing parentheses.
///
/// The full-width pair `（）` is tried before the ASCII pair `()`. Only the
/// outermost layer is removed, and only when both ends match.
///
/// # Examples
/// ```
/// use keiho_converter::text::normalize_caption;
///
/// assert_eq!(normalize_caption("（見出し）"), "見出し");
/// assert_eq!(normalize_caption("(heading)"), "heading");
/// assert_eq!(normalize_caption("（見出し"), "（見出し");
/// ```
pub fn normalize_caption(text: &str) -> String {
    let caption = normalize_text(text);

    for (open, close) in CAPTION_PARENTHESES {
        // `strip_suffix` after `strip_prefix` needs at least two characters
        if let Some(inner) = caption
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner.trim().to_string();
        }
    }

    caption
}
