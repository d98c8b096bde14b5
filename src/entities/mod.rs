use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A search phrase a project wants an article to rank for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub phrase: String,
    #[serde(default)]
    pub secondary_phrases: Vec<String>,
    pub target_word_count: Option<u32>,
}

impl Keyword {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            secondary_phrases: Vec::new(),
            target_word_count: None,
        }
    }

    /// Primary phrase plus secondary phrases, in order. This is the
    /// target-keyword list the link ranker scores pages against.
    pub fn target_phrases(&self) -> Vec<&str> {
        let mut phrases = vec![self.phrase.as_str()];
        phrases.extend(self.secondary_phrases.iter().map(String::as_str));
        phrases
    }
}

/// An article under evaluation. The scorer treats this as a read-only view;
/// re-scoring after edits is always a fresh computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub meta_description: Option<String>,
    pub body_markdown: Option<String>,
    pub body_html: Option<String>,
    pub word_count: Option<u32>,
    /// Arbitrary metadata carried by the article (generation settings,
    /// enrichment flags). Score breakdowns are merged in here
    /// non-destructively.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Article {
    /// Canonical body text: markdown when present, HTML as a fallback.
    pub fn body(&self) -> &str {
        self.body_markdown
            .as_deref()
            .or(self.body_html.as_deref())
            .unwrap_or("")
    }
}

/// Coarse page category inferred from URL path conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Blog,
    Product,
    Service,
    Landing,
    Other,
}

/// A URL belonging to a project's site, discovered via sitemap sync or added
/// manually. `link_count` tracks how many generated articles already link
/// here; the ranker uses it to spread internal links evenly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub url: String,
    pub title: Option<String>,
    pub page_type: PageType,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Sitemap priority hint, 0.0..=1.0.
    pub priority: f64,
    pub link_count: u32,
    pub is_active: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl Page {
    pub fn new(url: impl Into<String>, page_type: PageType) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            title: None,
            page_type,
            keywords: Vec::new(),
            priority: 0.5,
            link_count: 0,
            is_active: true,
            last_synced_at: None,
        }
    }
}

/// A page paired with its relevance score for one ranking call. Transient;
/// never persisted.
#[derive(Debug, Clone)]
pub struct RankedPage {
    pub page: Page,
    pub score: f64,
}

/// Per-project knobs that influence link-candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub prioritize_blog_links: bool,
    pub max_internal_links: usize,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            prioritize_blog_links: false,
            max_internal_links: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_prefers_markdown_over_html() {
        let mut article = Article {
            id: Uuid::new_v4(),
            title: "Test".to_string(),
            meta_description: None,
            body_markdown: Some("## Markdown".to_string()),
            body_html: Some("<h2>HTML</h2>".to_string()),
            word_count: None,
            metadata: Map::new(),
        };
        assert_eq!(article.body(), "## Markdown");

        article.body_markdown = None;
        assert_eq!(article.body(), "<h2>HTML</h2>");

        article.body_html = None;
        assert_eq!(article.body(), "");
    }

    #[test]
    fn target_phrases_keeps_primary_first() {
        let mut keyword = Keyword::new("best coffee makers");
        keyword.secondary_phrases = vec!["coffee grinder".to_string(), "espresso".to_string()];
        assert_eq!(
            keyword.target_phrases(),
            vec!["best coffee makers", "coffee grinder", "espresso"]
        );
    }

    #[test]
    fn page_defaults() {
        let page = Page::new("https://example.com/blog/post", PageType::Blog);
        assert_eq!(page.priority, 0.5);
        assert_eq!(page.link_count, 0);
        assert!(page.is_active);
    }
}
