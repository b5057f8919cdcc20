//! HTML to plain text
//!
//! Good enough for government info pages: drops scripts, styles and
//! comments, strips the remaining tags, decodes the common entities and
//! collapses whitespace into single spaces.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static HIDDEN_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)\s*>")
        .expect("hidden block pattern is valid")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("entity pattern is valid")
});

/// Extract readable text from an HTML document
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let text = HIDDEN_BLOCK.replace_all(html, " ");
    let text = COMMENT.replace_all(&text, " ");
    let text = TAG.replace_all(&text, " ");
    let text = ENTITY.replace_all(&text, |caps: &Captures<'_>| decode_entity(&caps[0], &caps[1]));

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode one entity body; unknown entities are kept verbatim
fn decode_entity(raw: &str, body: &str) -> String {
    let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        match body {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            "ndash" => Some('\u{2013}'),
            "mdash" => Some('\u{2014}'),
            "rsquo" => Some('\u{2019}'),
            "lsquo" => Some('\u{2018}'),
            "rdquo" => Some('\u{201d}'),
            "ldquo" => Some('\u{201c}'),
            "sect" => Some('\u{a7}'),
            "copy" => Some('\u{a9}'),
            _ => None,
        }
    };

    decoded.map_or_else(|| raw.to_string(), |c| c.to_string())
}
