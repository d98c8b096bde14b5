use serde_json::Map;
use uuid::Uuid;

use copyrank::entities::{Article, Keyword, Page, PageType};
use copyrank::sitemap;

/// Build an article the way the generation pipeline hands them over:
/// markdown body, optional meta description, no precomputed word count.
pub fn article(title: &str, meta: Option<&str>, body: &str) -> Article {
    Article {
        id: Uuid::new_v4(),
        title: title.to_string(),
        meta_description: meta.map(str::to_string),
        body_markdown: Some(body.to_string()),
        body_html: None,
        word_count: None,
        metadata: Map::new(),
    }
}

pub fn keyword(phrase: &str, secondaries: &[&str]) -> Keyword {
    let mut keyword = Keyword::new(phrase);
    keyword.secondary_phrases = secondaries.iter().map(|s| s.to_string()).collect();
    keyword
}

/// Build a page the way sitemap sync does: classify the URL and extract
/// keywords and a title from it.
pub fn synced_page(url: &str, priority: f64) -> Page {
    let mut page = Page::new(url, sitemap::classify_page_type(url));
    page.keywords = sitemap::extract_keywords_from_url(url);
    let title = sitemap::extract_title_from_url(url);
    if !title.is_empty() {
        page.title = Some(title);
    }
    page.priority = priority;
    page
}

/// A realistic generated article body used across integration tests.
pub fn sample_body() -> String {
    let mut body = String::from(
        "Best coffee makers have never been easier to compare. This guide covers what \
matters when choosing a machine for daily brewing at home.\n\n\
## How we tested the best coffee makers\n\n\
- brew temperature stability\n\
- carafe insulation\n\
- ease of cleaning\n\n\
### Drip machines\n\n\
Drip machines remain the default choice for most kitchens.\n\n\
### Espresso machines\n\n\
| Model | Price | Rating |\n\
|---|---|---|\n\
| Aurora X | $199 | 4.5 |\n\n\
![side by side comparison](https://example.com/chart.png)\n\n\
## Frequently Asked Questions\n\n\
Which coffee maker lasts longest? See [our durability tests](https://example.com/tests).\n\n",
    );
    // pad towards a realistic article length
    for _ in 0..80 {
        body.push_str(
            "A good coffee maker balances extraction time against temperature so every \
cup tastes consistent from the first pour to the last one of the morning. ",
        );
    }
    body
}
