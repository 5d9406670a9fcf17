use std::sync::LazyLock;

use regex::Regex;

// [m1], [m2] ... open a paragraph
static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[m\d+\]").unwrap());

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[/?(m\d?|c|p|ref|b|i|ex|\*)\]").unwrap());

/// Strips BKRS markup from a meaning line.
///
/// Paragraph markers become newlines, the remaining known tags are dropped,
/// escaped brackets are restored and the result is trimmed.
pub fn clean(raw: &str) -> String {
    // Paragraph markers also match TAG_RE, so they must go first.
    let text = PARAGRAPH_RE.replace_all(raw, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = text.replace("\\[", "[").replace("\\]", "]");

    text.trim().to_string()
}
