//! HTML entity decoding for rendered messages
//!
//! Messages may carry escaped markup (`&amp;`, `&ouml;`, `&#39;`,
//! `&#x2014;`). The decoder follows the WHATWG character-reference rules:
//! the full named-entity table, legacy names without a trailing semicolon
//! (`&copy 2020`), and numeric references. Everything else, tags included,
//! is left untouched.

/// Decode HTML entity references.
///
/// Unknown named entities are kept verbatim; numeric references to NUL,
/// surrogates or code points past U+10FFFF decode to U+FFFD.
///
/// ```
/// use blok::i18n::decode_html;
///
/// assert_eq!(decode_html("K&ouml;ln"), "Köln");
/// assert_eq!(decode_html("&lt;b&gt;"), "<b>");
/// ```
pub fn decode_html(source: &str) -> String {
    if !source.contains('&') {
        return source.to_string();
    }

    htmlize::unescape(source).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_numeric() {
        assert_eq!(
            decode_html("Tom &amp; Jerry &#39;s &#x41;"),
            "Tom & Jerry 's A"
        );
        assert_eq!(decode_html("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn test_accented_letters() {
        assert_eq!(decode_html("K&ouml;ln"), "Köln");
        assert_eq!(decode_html("&Eacute;t&eacute;"), "Été");
        assert_eq!(decode_html("Gr&uuml;&szlig;e"), "Grüße");
        assert_eq!(decode_html("Fran&ccedil;ais"), "Français");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(decode_html("I &hearts; Rust"), "I \u{2665} Rust");
        assert_eq!(decode_html("10&nbsp;&euro;"), "10\u{a0}\u{20ac}");
        assert_eq!(decode_html("&rarr; next"), "\u{2192} next");
    }

    #[test]
    fn test_legacy_entity_without_semicolon() {
        assert_eq!(decode_html("&copy 2020"), "\u{a9} 2020");
        assert_eq!(decode_html("a &amp b"), "a & b");
    }

    #[test]
    fn test_unknown_entity_kept() {
        assert_eq!(decode_html("a &bogus; b"), "a &bogus; b");
        assert_eq!(decode_html("fish & chips"), "fish & chips");
    }

    #[test]
    fn test_tags_untouched() {
        assert_eq!(decode_html("<em>hi</em>"), "<em>hi</em>");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(decode_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_invalid_code_point() {
        assert_eq!(decode_html("&#xD800;"), "\u{fffd}");
        assert_eq!(decode_html("&#0;"), "\u{fffd}");
        assert_eq!(decode_html("&#99999999;"), "\u{fffd}");
    }
}
