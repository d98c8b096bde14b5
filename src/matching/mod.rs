pub mod keyword;
pub mod stopwords;
pub mod word;

pub use keyword::{contains_keyword, keyword_density, significant_words};
pub use word::{normalize, variation_in_text};
