//! Named pure detectors over markdown/HTML article bodies.
//!
//! Each detector is a small regex-backed function so the structure scorers
//! can be unit tested one signal at a time.

use once_cell::sync::Lazy;
use regex::Regex;

static H2_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^##\s+(.+)$").expect("Failed to compile H2 regex"));

static H3_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^###\s+(.+)$").expect("Failed to compile H3 regex"));

static BULLET_LIST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-*+]\s+\S").expect("Failed to compile bullet regex"));

static NUMBERED_LIST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s+\S").expect("Failed to compile numbered regex"));

static TABLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\|[^\n]+\|").expect("Failed to compile table regex"));

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]+\]\([^)]+\)").expect("Failed to compile link regex"));

static HTML_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile tag regex"));

/// All H2 heading texts, in document order.
pub fn h2_headings(body: &str) -> Vec<&str> {
    H2_REGEX
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim()))
        .collect()
}

pub fn h2_count(body: &str) -> usize {
    H2_REGEX.find_iter(body).count()
}

pub fn h3_count(body: &str) -> usize {
    H3_REGEX.find_iter(body).count()
}

/// Bullet or numbered list present.
pub fn has_list(body: &str) -> bool {
    BULLET_LIST_REGEX.is_match(body) || NUMBERED_LIST_REGEX.is_match(body)
}

/// A markdown table row, i.e. a line containing `|...|`.
pub fn has_table(body: &str) -> bool {
    TABLE_REGEX.is_match(body)
}

/// An FAQ section, detected by "FAQ" or "Frequently Asked Questions" in any
/// casing.
pub fn has_faq(body: &str) -> bool {
    let lower = body.to_lowercase();
    lower.contains("faq") || lower.contains("frequently asked questions")
}

/// An image placeholder (`[IMAGE:` marker used by the generation pipeline)
/// or markdown image syntax.
pub fn has_image(body: &str) -> bool {
    body.contains("[IMAGE:") || body.contains("![")
}

/// A markdown link `[text](url)`. Note that image syntax `![alt](url)` also
/// satisfies this pattern.
pub fn has_link(body: &str) -> bool {
    LINK_REGEX.is_match(body)
}

/// Text with HTML tags removed. Markdown punctuation is left alone; it does
/// not affect whitespace-delimited word counting.
pub fn strip_markup(text: &str) -> String {
    HTML_TAG_REGEX.replace_all(text, " ").to_string()
}

/// Whitespace-delimited word count of the stripped text.
pub fn count_words(text: &str) -> usize {
    strip_markup(text).split_whitespace().count()
}

/// The first `n` words of the stripped text, joined by single spaces.
pub fn first_words(text: &str, n: usize) -> String {
    strip_markup(text)
        .split_whitespace()
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}
