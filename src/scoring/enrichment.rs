use crate::entities::Article;
use crate::markup;
use crate::scoring::breakdown::CategoryScore;

pub const MAX: u32 = 8;

const IMAGE_POINTS: u32 = 4;
const LINK_POINTS: u32 = 4;

/// Enrichment signals: at least one image (or pipeline image placeholder)
/// and at least one markdown link.
pub fn score(article: &Article) -> CategoryScore {
    let mut cat = CategoryScore::new(MAX);
    let body = article.body();

    let has_image = markup::has_image(body);
    if has_image {
        cat.add(IMAGE_POINTS);
    }
    cat.detail("has_image", has_image);

    let has_link = markup::has_link(body);
    if has_link {
        cat.add(LINK_POINTS);
    }
    cat.detail("has_link", has_link);

    cat
}
