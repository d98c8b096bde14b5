use std::collections::HashSet;
use std::sync::LazyLock;

/// Stop words excluded from significant-word extraction: articles,
/// prepositions, auxiliary verbs, conjunctions and common
/// pronouns/determiners. Tokens of two characters or fewer are filtered
/// before this set is consulted, so it only carries longer words.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "has",
        "have", "was", "were", "will", "with", "this", "that", "these", "those", "from",
        "they", "them", "their", "there", "what", "when", "where", "which", "who", "whom",
        "why", "how", "been", "being", "its", "his", "her", "she", "him", "our", "ours",
        "your", "yours", "out", "off", "about", "above", "after", "again", "against",
        "before", "below", "between", "both", "down", "during", "each", "few", "further",
        "here", "into", "more", "most", "nor", "once", "only", "other", "over", "own",
        "same", "should", "some", "such", "than", "then", "too", "under", "until", "very",
        "would", "could", "did", "does", "doing", "while", "through",
    ])
});

/// Whether a lowercased token is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("with"));
        assert!(is_stop_word("should"));
    }

    #[test]
    fn test_content_words_pass() {
        assert!(!is_stop_word("coffee"));
        assert!(!is_stop_word("invoice"));
        assert!(!is_stop_word("australia"));
    }
}
