use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::entities::PageType;

const BLOG_PATTERNS: [&str; 5] = ["/blog/", "/posts/", "/articles/", "/news/", "/resources/"];
const PRODUCT_PATTERNS: [&str; 5] = ["/product/", "/products/", "/shop/", "/store/", "/item/"];
const SERVICE_PATTERNS: [&str; 3] = ["/service/", "/services/", "/solutions/"];
const LANDING_PATTERNS: [&str; 3] = ["/landing/", "/lp/", "/campaign/"];

/// Tokens dropped from URL keyword extraction: scheme/host noise, common
/// extensions and filler words.
const URL_STOP_WORDS: [&str; 16] = [
    "www", "http", "https", "com", "org", "net", "html", "php", "aspx", "the", "and", "for",
    "with", "this", "that", "its",
];

const MAX_URL_KEYWORDS: usize = 10;

static EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.[a-zA-Z]{2,4}$").expect("Failed to compile extension regex")
});

/// Classify a URL into a coarse page type from its path conventions.
/// Substring tests, first matching category wins.
pub fn classify_page_type(url: &str) -> PageType {
    let url = url.to_lowercase();

    if BLOG_PATTERNS.iter().any(|p| url.contains(p)) {
        PageType::Blog
    } else if PRODUCT_PATTERNS.iter().any(|p| url.contains(p)) {
        PageType::Product
    } else if SERVICE_PATTERNS.iter().any(|p| url.contains(p)) {
        PageType::Service
    } else if LANDING_PATTERNS.iter().any(|p| url.contains(p)) {
        PageType::Landing
    } else {
        PageType::Other
    }
}

/// Keyword tokens from a URL path: split on `/`, `-` and `_`, drop short,
/// numeric and stop-list tokens, keep at most ten.
pub fn extract_keywords_from_url(url: &str) -> Vec<String> {
    let path = url_path(url);
    let path = EXTENSION_REGEX.replace(&path, "");

    path.split(['/', '-', '_'])
        .map(str::to_lowercase)
        .filter(|token| {
            token.chars().count() > 2
                && !token.chars().all(|c| c.is_ascii_digit())
                && !URL_STOP_WORDS.contains(&token.as_str())
        })
        .take(MAX_URL_KEYWORDS)
        .collect()
}

/// Human-readable title from the last path segment: extension stripped,
/// separators spaced, each word title-cased. Empty path gives an empty
/// string.
pub fn extract_title_from_url(url: &str) -> String {
    let path = url_path(url);
    let Some(segment) = path.split('/').filter(|s| !s.is_empty()).next_back() else {
        return String::new();
    };
    let segment = EXTENSION_REGEX.replace(segment, "");

    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Path component of a URL; unparseable input is treated as a bare path so
/// sitemap rows with relative entries still classify.
fn url_path(url: &str) -> String {
    Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string())
}
