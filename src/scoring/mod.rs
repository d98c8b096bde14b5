pub mod breakdown;
pub mod enrichment;
pub mod keyword_optimization;
pub mod length;
pub mod meta;
pub mod structure;

pub use breakdown::{Category, CategoryScore, Detail, ScoreBreakdown};

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::entities::{Article, Keyword};
use crate::storage::ArticleStore;

/// Metadata keys written by [`SeoScorer::calculate_and_save`].
pub const META_SCORE_KEY: &str = "seo_score";
pub const META_BREAKDOWN_KEY: &str = "seo_score_breakdown";
pub const META_SCORED_AT_KEY: &str = "seo_scored_at";

/// Score an article against its target keyword. Pure: same inputs always
/// produce the same breakdown, so previews and re-scores just recompute.
pub fn calculate(article: &Article, keyword: Option<&Keyword>) -> ScoreBreakdown {
    ScoreBreakdown::from_categories(vec![
        (
            Category::KeywordOptimization,
            keyword_optimization::score(article, keyword),
        ),
        (Category::ContentStructure, structure::score(article)),
        (Category::ContentLength, length::score(article, keyword)),
        (Category::MetaQuality, meta::score(article)),
        (Category::Enrichment, enrichment::score(article)),
    ])
}

/// Scorer with a persistence collaborator. `calculate_and_save` is the only
/// side-effecting entry point in the crate, and the side effect itself is
/// delegated to the store.
pub struct SeoScorer {
    store: Arc<dyn ArticleStore>,
}

impl SeoScorer {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// Compute the score, merge it into the article's existing metadata
    /// without clobbering unrelated keys, persist, and return the score.
    #[instrument(skip(self, article, keyword), fields(article_id = %article.id))]
    pub async fn calculate_and_save(
        &self,
        article: &Article,
        keyword: Option<&Keyword>,
    ) -> anyhow::Result<u32> {
        let result = calculate(article, keyword);
        debug!(score = result.score, "computed seo score");

        let mut metadata = article.metadata.clone();
        metadata.insert(META_SCORE_KEY.to_string(), Value::from(result.score));
        metadata.insert(
            META_BREAKDOWN_KEY.to_string(),
            serde_json::to_value(&result.breakdown)?,
        );
        metadata.insert(
            META_SCORED_AT_KEY.to_string(),
            Value::from(Utc::now().to_rfc3339()),
        );

        self.store
            .save_score(article.id, result.score, metadata)
            .await?;
        Ok(result.score)
    }
}
