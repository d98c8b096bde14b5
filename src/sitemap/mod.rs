pub mod classifier;

pub use classifier::{classify_page_type, extract_keywords_from_url, extract_title_from_url};
