use crate::entities::{Article, Keyword};
use crate::markup;
use crate::scoring::breakdown::CategoryScore;

pub const MAX: u32 = 20;

/// Target used when the keyword carries no explicit word-count goal.
const DEFAULT_TARGET_WORDS: u32 = 1500;

/// Length score: a bracket score for absolute size, scaled down when the
/// article falls well short of its target word count. Overshooting the target
/// is never penalized beyond the bracket score itself.
pub fn score(article: &Article, keyword: Option<&Keyword>) -> CategoryScore {
    let mut cat = CategoryScore::new(MAX);

    let word_count = article
        .word_count
        .unwrap_or_else(|| markup::count_words(article.body()) as u32);

    let base: u32 = if word_count < 500 {
        5
    } else if word_count < 1000 {
        10
    } else if word_count < 1500 {
        15
    } else if word_count <= 2500 {
        20
    } else {
        18
    };

    let target = keyword
        .and_then(|k| k.target_word_count)
        .filter(|&t| t > 0)
        .unwrap_or(DEFAULT_TARGET_WORDS);
    let ratio = word_count as f64 / target as f64;

    let multiplier = if ratio >= 0.9 {
        1.0
    } else if ratio >= 0.7 {
        0.9
    } else if ratio >= 0.5 {
        0.7
    } else {
        0.5
    };

    cat.add((base as f64 * multiplier).round() as u32);
    cat.detail("word_count", word_count as usize);
    cat.detail("target_word_count", target as usize);
    cat.detail("ratio", (ratio * 100.0).round() / 100.0);

    cat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::article_with_body;

    fn article_with_count(word_count: u32) -> Article {
        let mut article = article_with_body("Title", "body");
        article.word_count = Some(word_count);
        article
    }

    fn keyword_with_target(target: u32) -> Keyword {
        let mut keyword = Keyword::new("test phrase");
        keyword.target_word_count = Some(target);
        keyword
    }

    #[test]
    fn test_on_target_1500_words_scores_full() {
        // 1500 falls into the <=2500 bracket, ratio 1.0 keeps it unscaled
        let cat = score(&article_with_count(1500), Some(&keyword_with_target(1500)));
        assert_eq!(cat.score, 20);
    }

    #[test]
    fn test_bracket_edge_below_1500() {
        let cat = score(&article_with_count(1499), Some(&keyword_with_target(1500)));
        // 1499 sits in the lower bracket despite being on target
        assert_eq!(cat.score, 15);
    }

    #[test]
    fn test_short_of_target_is_scaled() {
        // 900 words against a 1500 target: bracket 10, ratio 0.6 -> x0.7
        let cat = score(&article_with_count(900), Some(&keyword_with_target(1500)));
        assert_eq!(cat.score, 7);
    }

    #[test]
    fn test_far_short_of_target() {
        // 600 words against a 3000 target: bracket 10, ratio 0.2 -> x0.5
        let cat = score(&article_with_count(600), Some(&keyword_with_target(3000)));
        assert_eq!(cat.score, 5);
    }

    #[test]
    fn test_overshoot_not_penalized() {
        // 2400 words against a 1500 target: ratio 1.6, bracket score stands
        let cat = score(&article_with_count(2400), Some(&keyword_with_target(1500)));
        assert_eq!(cat.score, 20);
    }

    #[test]
    fn test_very_long_article_drops_to_18() {
        let cat = score(&article_with_count(3000), Some(&keyword_with_target(1500)));
        assert_eq!(cat.score, 18);
    }

    #[test]
    fn test_default_target_when_keyword_absent() {
        let cat = score(&article_with_count(1500), None);
        assert_eq!(cat.score, 20);
    }

    #[test]
    fn test_word_count_derived_from_body() {
        let mut article = article_with_body("Title", "<p>one two three four five</p>");
        article.word_count = None;
        let cat = score(&article, None);
        // 5 words: lowest bracket, ratio far below default target
        assert_eq!(cat.score, 3);
    }
}
