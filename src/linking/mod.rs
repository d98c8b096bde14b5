//! Internal-link relevance ranking.
//!
//! Greedy single-pass ranking: each candidate page is scored independently
//! against the article's target keywords and the best scores win. The
//! `link_count` penalty plus recompute-per-article keeps link distribution
//! converging toward even without any global assignment step.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::entities::{Keyword, Page, PageType, ProjectSettings, RankedPage};

const PRIORITY_WEIGHT: f64 = 30.0;
const TOP_PRIORITY_THRESHOLD: f64 = 0.8;
const TOP_PRIORITY_BONUS: f64 = 15.0;
const PAGE_KEYWORD_BONUS: f64 = 20.0;
const TITLE_MATCH_BONUS: f64 = 15.0;
const URL_MATCH_BONUS: f64 = 10.0;
const BLOG_BONUS: f64 = 5.0;
const LINK_COUNT_PENALTY: f64 = 0.5;

pub struct LinkRelevanceRanker {
    settings: ProjectSettings,
}

impl LinkRelevanceRanker {
    pub fn new(settings: ProjectSettings) -> Self {
        Self { settings }
    }

    /// Pre-scoring candidate order: active pages only, blog pages first when
    /// the project asks for it, then least-linked first. Both sorts are
    /// stable, so the base ordering doubles as the tie-breaker later.
    pub fn select_candidates(&self, pages: &[Page]) -> Vec<Page> {
        let mut candidates: Vec<Page> = pages.iter().filter(|p| p.is_active).cloned().collect();

        if self.settings.prioritize_blog_links {
            candidates.sort_by_key(|p| p.page_type != PageType::Blog);
        }
        candidates.sort_by_key(|p| p.link_count);
        candidates
    }

    /// Relevance score of one page against the target keywords.
    ///
    /// Additive and uncapped across keywords; the priority bonus is a step at
    /// 0.8 on purpose, so the site's own top sitemap picks get a
    /// disproportionate push. The keyword test is a bidirectional substring
    /// check with no minimum token length.
    pub fn score_page(&self, page: &Page, target_keywords: &[&str]) -> f64 {
        let mut score = page.priority * PRIORITY_WEIGHT;

        if page.priority >= TOP_PRIORITY_THRESHOLD {
            score += TOP_PRIORITY_BONUS;
        }

        let title = page.title.as_deref().unwrap_or("").to_lowercase();
        let url = page.url.to_lowercase();
        let page_keywords: Vec<String> =
            page.keywords.iter().map(|k| k.to_lowercase()).collect();

        for target in target_keywords {
            let target = target.to_lowercase();
            if target.is_empty() {
                continue;
            }

            if page_keywords
                .iter()
                .any(|pk| pk.contains(&target) || target.contains(pk.as_str()))
            {
                score += PAGE_KEYWORD_BONUS;
            }
            if title.contains(&target) {
                score += TITLE_MATCH_BONUS;
            }
            if url.contains(&target) {
                score += URL_MATCH_BONUS;
            }
        }

        if page.page_type == PageType::Blog {
            score += BLOG_BONUS;
        }

        score -= page.link_count as f64 * LINK_COUNT_PENALTY;
        score.max(0.0)
    }

    /// Top `limit` internal-link targets for an article being generated.
    /// Stable descending sort; ties keep the candidate order, i.e. the
    /// least-linked page wins.
    #[instrument(skip(self, pages, target_keywords))]
    pub fn relevant_pages(
        &self,
        pages: &[Page],
        target_keywords: &[&str],
        limit: usize,
    ) -> Vec<Page> {
        let candidates = self.select_candidates(pages);
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedPage> = candidates
            .into_iter()
            .map(|page| {
                let score = self.score_page(&page, target_keywords);
                RankedPage { page, score }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(limit);

        debug!(
            selected = ranked.len(),
            top_score = ranked.first().map(|r| r.score).unwrap_or(0.0),
            "ranked internal link candidates"
        );
        ranked.into_iter().map(|r| r.page).collect()
    }

    /// Ranking entry point for the generation pipeline: builds the target
    /// list from the article's keyword (primary plus secondaries) and uses
    /// the project's configured link limit.
    pub fn relevant_pages_for_keyword(&self, pages: &[Page], keyword: &Keyword) -> Vec<Page> {
        self.relevant_pages(
            pages,
            &keyword.target_phrases(),
            self.settings.max_internal_links,
        )
    }
}
