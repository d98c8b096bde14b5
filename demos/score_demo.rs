use std::sync::Arc;

use anyhow::Result;
use serde_json::Map;
use uuid::Uuid;

use copyrank::entities::{Article, Keyword, ProjectSettings};
use copyrank::linking::LinkRelevanceRanker;
use copyrank::scoring::{self, SeoScorer};
use copyrank::sitemap;
use copyrank::storage::InMemoryStore;

/// Demo program that scores a sample article and ranks link candidates
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let article = Article {
        id: Uuid::new_v4(),
        title: "The 10 Best Coffee Makers of 2026 Compared".to_string(),
        meta_description: Some(
            "We tested the best coffee makers on the market this year so you can pick \
the right machine for your kitchen, budget and daily brewing habits."
                .to_string(),
        ),
        body_markdown: Some(
            "Best coffee makers are easier to compare than ever.\n\n\
## Choosing the best coffee maker\n\n\
- capacity\n- build quality\n\n\
## Frequently Asked Questions\n\n\
See [our picks](https://example.com/picks).\n"
                .to_string(),
        ),
        body_html: None,
        word_count: None,
        metadata: Map::new(),
    };
    let mut keyword = Keyword::new("best coffee makers");
    keyword.target_word_count = Some(1500);

    // Preview score (what the "recalculate" endpoint shows)
    let breakdown = scoring::calculate(&article, Some(&keyword));
    println!("score: {}", breakdown.score);
    println!("{}", serde_json::to_string_pretty(&breakdown)?);

    // Persisted score via the storage collaborator
    let store = Arc::new(InMemoryStore::new());
    let scorer = SeoScorer::new(store.clone());
    let saved = scorer.calculate_and_save(&article, Some(&keyword)).await?;
    println!("saved score: {}", saved);

    // Rank internal-link candidates the way the generation pipeline does
    let urls = [
        ("https://roast.example/blog/best-coffee-makers-2026", 0.9),
        ("https://roast.example/shop/aurora-x-coffee-maker", 0.6),
        ("https://roast.example/about", 0.3),
    ];
    let pages: Vec<_> = urls
        .iter()
        .map(|(url, priority)| {
            let mut page =
                copyrank::entities::Page::new(*url, sitemap::classify_page_type(url));
            page.keywords = sitemap::extract_keywords_from_url(url);
            page.priority = *priority;
            page
        })
        .collect();

    let ranker = LinkRelevanceRanker::new(ProjectSettings::default());
    for page in ranker.relevant_pages_for_keyword(&pages, &keyword) {
        println!("link candidate: {}", page.url);
    }

    Ok(())
}
