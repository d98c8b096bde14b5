use crate::entities::{Article, Keyword};
use crate::markup;
use crate::matching::{contains_keyword, keyword_density};
use crate::scoring::breakdown::CategoryScore;

pub const MAX: u32 = 35;

const TITLE_POINTS: u32 = 10;
const META_POINTS: u32 = 8;
const OPENING_POINTS: u32 = 7;
const DENSITY_POINTS: u32 = 5;
const DENSITY_PARTIAL_POINTS: u32 = 2;
const HEADING_POINTS: u32 = 5;

/// Words of the body considered "the opening" for early keyword placement.
const OPENING_WORDS: usize = 150;

/// How well the article uses its target keyword: title, meta description,
/// early placement, density in the healthy range, and H2 headings. Without an
/// associated keyword this category scores zero.
pub fn score(article: &Article, keyword: Option<&Keyword>) -> CategoryScore {
    let mut cat = CategoryScore::new(MAX);

    let Some(keyword) = keyword.filter(|k| !k.phrase.trim().is_empty()) else {
        cat.detail("no_keyword", true);
        return cat;
    };
    let phrase = keyword.phrase.as_str();
    let body = article.body();

    let in_title = contains_keyword(&article.title, phrase);
    if in_title {
        cat.add(TITLE_POINTS);
    }
    cat.detail("in_title", in_title);

    let in_meta = article
        .meta_description
        .as_deref()
        .map(|meta| contains_keyword(meta, phrase))
        .unwrap_or(false);
    if in_meta {
        cat.add(META_POINTS);
    }
    cat.detail("in_meta_description", in_meta);

    let opening = markup::first_words(body, OPENING_WORDS);
    let in_opening = contains_keyword(&opening, phrase);
    if in_opening {
        cat.add(OPENING_POINTS);
    }
    cat.detail("in_opening", in_opening);

    let density = keyword_density(body, phrase);
    if (0.5..=2.5).contains(&density) {
        cat.add(DENSITY_POINTS);
    } else if density > 0.0 && density < 0.5 {
        cat.add(DENSITY_PARTIAL_POINTS);
    }
    cat.detail("density", (density * 100.0).round() / 100.0);

    let in_heading = markup::h2_headings(body)
        .iter()
        .any(|heading| contains_keyword(heading, phrase));
    if in_heading {
        cat.add(HEADING_POINTS);
    }
    cat.detail("in_h2_heading", in_heading);

    cat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::article_with_body;

    #[test]
    fn test_no_keyword_scores_zero_with_flag() {
        let article = article_with_body("Some Title", "Plain body text.");
        let cat = score(&article, None);
        assert_eq!(cat.score, 0);
        assert_eq!(cat.max, MAX);
        assert_eq!(
            cat.details.get("no_keyword"),
            Some(&crate::scoring::breakdown::Detail::Bool(true))
        );
    }

    #[test]
    fn test_title_and_heading_signals() {
        let mut article = article_with_body(
            "The Best Coffee Brewing Methods",
            "Intro paragraph.\n\n## Best coffee gear\n\nMore text.",
        );
        article.meta_description = Some("Our guide to the best coffee you can brew.".to_string());
        let keyword = Keyword::new("best coffee");

        let cat = score(&article, Some(&keyword));
        assert_eq!(
            cat.details.get("in_title"),
            Some(&crate::scoring::breakdown::Detail::Bool(true))
        );
        assert_eq!(
            cat.details.get("in_h2_heading"),
            Some(&crate::scoring::breakdown::Detail::Bool(true))
        );
        // title 10 + meta 8 + opening 7 + heading 5; density of a tiny body
        // overshoots the healthy range and earns nothing
        assert_eq!(cat.score, 30);
    }

    #[test]
    fn test_empty_phrase_treated_as_missing() {
        let article = article_with_body("Title", "Body text here.");
        let keyword = Keyword::new("   ");
        let cat = score(&article, Some(&keyword));
        assert_eq!(cat.score, 0);
    }
}
