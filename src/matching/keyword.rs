use regex::Regex;

use crate::markup;
use crate::matching::stopwords;
use crate::matching::word;

/// The meaningful tokens of a keyword phrase: lowercased, longer than two
/// characters and not stop words. Order is preserved but callers treat the
/// result as a set.
pub fn significant_words(phrase: &str) -> Vec<String> {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() > 2 && !stopwords::is_stop_word(token))
        .collect()
}

/// Whether `phrase` is present in `text`, either as an exact
/// (case-insensitive, word-bounded) phrase or as a smart match where every
/// significant word appears somewhere in the text in some inflected form.
pub fn contains_keyword(text: &str, phrase: &str) -> bool {
    if phrase.trim().is_empty() || text.trim().is_empty() {
        return false;
    }

    // Exact whole-phrase match first
    let phrase_regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase.trim())))
        .expect("Failed to compile phrase regex");
    if phrase_regex.is_match(text) {
        return true;
    }

    // Smart match: every significant word must be independently present,
    // in any form and in any order
    let words = significant_words(phrase);
    if words.is_empty() {
        return false;
    }
    words.iter().all(|w| word::variation_in_text(w, text))
}

/// Approximate keyword density of `phrase` in `content`, as a percentage.
///
/// Counts prefix matches for each significant word, averages them across the
/// words of the phrase, and divides by the stripped word count. This
/// deliberately rewards natural variation instead of exact-phrase repetition.
pub fn keyword_density(content: &str, phrase: &str) -> f64 {
    let word_count = markup::count_words(content);
    if word_count == 0 {
        return 0.0;
    }

    let words = significant_words(phrase);
    if words.is_empty() {
        return 0.0;
    }

    let total_matches: usize = words.iter().map(|w| word::variation_count(w, content)).sum();

    (total_matches as f64 / words.len() as f64 / word_count as f64) * 100.0
}
