use crate::entities::Article;
use crate::markup;
use crate::scoring::breakdown::CategoryScore;

pub const MAX: u32 = 25;

const LIST_POINTS: u32 = 4;
const TABLE_POINTS: u32 = 4;
const FAQ_POINTS: u32 = 4;

/// Structural richness of the body: section headings, sub-headings, lists,
/// tables and an FAQ section.
pub fn score(article: &Article) -> CategoryScore {
    let mut cat = CategoryScore::new(MAX);
    let body = article.body();

    let h2_count = markup::h2_count(body);
    cat.add(match h2_count {
        0 => 0,
        1 | 2 => 3,
        3 | 4 => 6,
        _ => 8,
    });
    cat.detail("h2_count", h2_count);

    let h3_count = markup::h3_count(body);
    cat.add(match h3_count {
        0 => 0,
        1 => 1,
        2 | 3 => 3,
        _ => 5,
    });
    cat.detail("h3_count", h3_count);

    let has_list = markup::has_list(body);
    if has_list {
        cat.add(LIST_POINTS);
    }
    cat.detail("has_list", has_list);

    let has_table = markup::has_table(body);
    if has_table {
        cat.add(TABLE_POINTS);
    }
    cat.detail("has_table", has_table);

    let has_faq = markup::has_faq(body);
    if has_faq {
        cat.add(FAQ_POINTS);
    }
    cat.detail("has_faq", has_faq);

    cat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::article_with_body;

    #[test]
    fn test_full_structure_scenario() {
        // 3 H2s (6) + 2 H3s (3) + bullet list (4) + table (4) + FAQ (4) = 21
        let body = "\
## Section One

- point a
- point b

### Detail A

## Section Two

| Col | Col |
|---|---|
| 1 | 2 |

### Detail B

## Frequently Asked Questions

Answers here.";
        let article = article_with_body("Title", body);
        let cat = score(&article);
        assert_eq!(cat.score, 21);
        assert_eq!(cat.max, 25);
    }

    #[test]
    fn test_plain_text_scores_zero() {
        let article = article_with_body("Title", "Just a paragraph with no structure at all.");
        assert_eq!(score(&article).score, 0);
    }

    #[test]
    fn test_heading_brackets() {
        let five_h2 = (1..=5).map(|i| format!("## H{i}\n\n")).collect::<String>();
        let article = article_with_body("Title", &five_h2);
        // 5 H2s hit the top bracket
        assert_eq!(score(&article).score, 8);

        let article = article_with_body("Title", "## Only one\n\ntext");
        assert_eq!(score(&article).score, 3);
    }
}
