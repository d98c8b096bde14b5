use crate::entities::Article;
use crate::scoring::breakdown::CategoryScore;

pub const MAX: u32 = 12;

/// SERP-facing metadata quality: how close the title and meta description are
/// to the character lengths search engines display without truncation.
pub fn score(article: &Article) -> CategoryScore {
    let mut cat = CategoryScore::new(MAX);

    let title_len = article.title.chars().count();
    cat.add(length_points(title_len, (50, 60), (40, 70), (30, 80)));
    cat.detail("title_length", title_len);

    let meta_len = article
        .meta_description
        .as_deref()
        .map(|meta| meta.chars().count())
        .unwrap_or(0);
    cat.add(length_points(meta_len, (150, 160), (120, 170), (80, 200)));
    cat.detail("meta_description_length", meta_len);

    cat
}

/// 6 points inside the ideal range, 4 inside the good range, 2 inside the
/// acceptable range, 0 otherwise. Ranges are inclusive and nested.
fn length_points(
    len: usize,
    ideal: (usize, usize),
    good: (usize, usize),
    acceptable: (usize, usize),
) -> u32 {
    if len >= ideal.0 && len <= ideal.1 {
        6
    } else if len >= good.0 && len <= good.1 {
        4
    } else if len >= acceptable.0 && len <= acceptable.1 {
        2
    } else {
        0
    }
}
