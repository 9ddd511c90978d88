//! Synthesized placeholder art.
//!
//! Slides authored without a real asset still need something to render.
//! This module builds a self-contained SVG `data:` URI from the slide's
//! label: a soft gradient backdrop, a device-style frame, and the label
//! centered as text. Output is deterministic for a given label and never
//! fails, so callers can substitute it unconditionally.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Fixed canvas for synthesized art, matching the aspect of real showcase
/// assets.
pub const PLACEHOLDER_WIDTH: u32 = 1440;
pub const PLACEHOLDER_HEIGHT: u32 = 900;

/// Characters that must be escaped for the SVG to survive inside a
/// `data:` URI: controls, whitespace, and the URI-significant delimiters.
const DATA_URI_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'`');

/// Escape a label for embedding in SVG markup.
fn escape_label(label: &str) -> String {
    label
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build a renderable image resource for `label` with no network
/// dependency. Same label, byte-identical output.
pub fn placeholder_data_uri(label: &str) -> String {
    let safe_label = escape_label(label);

    let svg = format!(
        r##"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{safe_label}"><defs><linearGradient id="bg" x1="0" x2="1" y1="0" y2="1"><stop offset="0%" stop-color="#e2e8f0"/><stop offset="100%" stop-color="#f8fafc"/></linearGradient></defs><rect width="{w}" height="{h}" fill="url(#bg)"/><rect x="150" y="90" width="1140" height="720" rx="48" fill="#f8fafc" stroke="#cbd5e1" stroke-width="10"/><rect x="230" y="170" width="980" height="560" rx="38" fill="#e5e7eb" stroke="#cbd5e1" stroke-width="8" stroke-dasharray="18 14"/><text x="50%" y="50%" text-anchor="middle" fill="#475569" font-family="Inter, Arial, sans-serif" font-size="42" font-weight="700" letter-spacing="1">{safe_label}</text></svg>"##,
        w = PLACEHOLDER_WIDTH,
        h = PLACEHOLDER_HEIGHT,
    );

    format!(
        "data:image/svg+xml;utf8,{}",
        utf8_percent_encode(&svg, DATA_URI_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_label_yields_identical_output() {
        let a = placeholder_data_uri("Hub home screen");
        let b = placeholder_data_uri("Hub home screen");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_labels_yield_distinct_output() {
        assert_ne!(
            placeholder_data_uri("Screen A"),
            placeholder_data_uri("Screen B")
        );
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        let uri = placeholder_data_uri("Nav & <menu>");
        assert!(uri.contains("&amp;"));
        assert!(uri.contains("&lt;menu&gt;"));
        assert!(!uri.contains("<menu>"));
    }

    #[test]
    fn test_empty_label_still_produces_an_image() {
        let uri = placeholder_data_uri("");
        assert!(uri.starts_with("data:image/svg+xml;utf8,"));
        assert!(uri.contains("linearGradient"));
    }

    #[test]
    fn test_output_is_a_data_uri_without_raw_spaces() {
        let uri = placeholder_data_uri("Two words");
        assert!(!uri.contains(' '));
    }
}
