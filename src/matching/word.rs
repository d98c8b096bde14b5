use regex::Regex;

/// Minimum prefix length used for variation matching. Anything shorter
/// matches far too loosely ("inv" would hit "investment").
const MIN_PREFIX_CHARS: usize = 4;

/// Heuristic stem of a single lowercase token. Not a real stemmer: a small
/// ordered rule set that recovers common English inflections (plurals, past
/// tense, gerunds) without a dictionary. Length guards keep tiny words from
/// being over-stemmed ("boss" stays "boss").
pub fn normalize(word: &str) -> String {
    let word = word.to_lowercase();
    let len = word.chars().count();

    // stories -> story
    if len > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }

    // boxes -> box, watches -> watch
    if len > 4
        && ["sses", "shes", "ches", "xes", "zes"]
            .iter()
            .any(|suffix| word.ends_with(suffix))
    {
        return word[..word.len() - 2].to_string();
    }

    // invoices -> invoice, but boss stays boss
    if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    // invoiced -> invoic
    if len > 4 && word.ends_with("ed") {
        return word[..word.len() - 2].to_string();
    }

    // invoicing -> invoic
    if len > 5 && word.ends_with("ing") {
        return word[..word.len() - 3].to_string();
    }

    word
}

/// The prefix of a normalized word used for variation matching: 75% of the
/// stem, at least `MIN_PREFIX_CHARS`, never longer than the stem itself.
pub fn variation_prefix(normalized: &str) -> &str {
    let len = normalized.chars().count();
    let min_len = ((len as f64) * 0.75).round() as usize;
    let prefix_len = min_len.max(MIN_PREFIX_CHARS).min(len);
    let end = normalized
        .char_indices()
        .nth(prefix_len)
        .map(|(i, _)| i)
        .unwrap_or(normalized.len());
    &normalized[..end]
}

/// Regex matching whole words that start with `prefix`: the prefix followed
/// by zero or more letters, bounded on both sides.
pub fn prefix_regex(prefix: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}[a-z]*\b", regex::escape(prefix)))
        .expect("Failed to compile prefix regex")
}

/// Whether some inflected form of `word` occurs in `text`. Case-insensitive;
/// accepts any whole word sharing the variation prefix of the stem, so
/// "invoice" matches "invoices", "invoicing" and "invoiced".
pub fn variation_in_text(word: &str, text: &str) -> bool {
    let normalized = normalize(word);
    if normalized.is_empty() {
        return false;
    }
    prefix_regex(variation_prefix(&normalized)).is_match(text)
}

/// Count of whole words in `text` starting with the variation prefix of
/// `word`. Non-overlapping, case-insensitive. Used for density.
pub fn variation_count(word: &str, text: &str) -> usize {
    let normalized = normalize(word);
    if normalized.is_empty() {
        return 0;
    }
    prefix_regex(variation_prefix(&normalized))
        .find_iter(text)
        .count()
}
