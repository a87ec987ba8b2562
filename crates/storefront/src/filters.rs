//! Display helpers shared by the catalog and cart renderers.

/// Characters the catalog service sometimes leaves around image URLs,
/// e.g. `["https://i.imgur.com/abc.jpeg"]`.
const IMAGE_URL_WRAPPERS: &[char] = &['[', ']', '"', '\''];

/// Length of the description preview on catalog cards.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 25;

/// Strip leading/trailing bracket and quote characters from an image URL.
///
/// Idempotent: a bare URL is returned unchanged.
#[must_use]
pub fn sanitize_image_url(raw: &str) -> &str {
    raw.trim().trim_matches(IMAGE_URL_WRAPPERS).trim()
}

/// Truncate text to `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Short description shown on catalog cards.
#[must_use]
pub fn description_preview(description: &str) -> String {
    truncate(description, DESCRIPTION_PREVIEW_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_wrapped_url() {
        assert_eq!(
            sanitize_image_url("[\"https://i.imgur.com/QkIa5tT.jpeg\""),
            "https://i.imgur.com/QkIa5tT.jpeg"
        );
        assert_eq!(
            sanitize_image_url("\"https://i.imgur.com/jb5Yu0h.jpeg\"]"),
            "https://i.imgur.com/jb5Yu0h.jpeg"
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let bare = "https://i.imgur.com/QkIa5tT.jpeg";
        assert_eq!(sanitize_image_url(bare), bare);
        assert_eq!(sanitize_image_url(sanitize_image_url("[\"x\"]")), "x");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short", 25), "short");
        assert_eq!(truncate("", 25), "");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("héllo wörld", 2), "hé...");
    }

    #[test]
    fn test_description_preview() {
        let preview = description_preview("Andy shoes are designed to keeping in mind durability");
        assert_eq!(preview, "Andy shoes are designed t...");
    }
}
