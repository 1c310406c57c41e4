use once_cell::sync::Lazy;
use regex::Regex;

/// A run of word characters, optionally chained through single hyphens or apostrophes.
/// Two hyphens in a row never match, so `dash--dash` yields two words.
///
/// Word characters are letters, numerics of any kind and `_`. Combining marks
/// and other connector punctuation are boundaries, unlike the regex `\w`.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}_]+(?:[-'][\p{L}\p{N}_]+)*").unwrap()
});

/// Digits and underscores are deleted before matching, so `a1b` reads as `ab`.
static DIGITS_AND_UNDERSCORES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9_]+").unwrap()
});

/// Turns raw text into normalized word tokens, in input order.
///
/// The text is lowercased and stripped of digits and underscores, words are
/// extracted with the chained-word grammar, and the hyphens inside each word
/// are removed afterwards. Apostrophes are kept: `can't` stays `can't`, while
/// `out-of-the-way` becomes `outoftheway`.
///
/// Total over any input; the worst case is an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = DIGITS_AND_UNDERSCORES.replace_all(&lowered, "");
    scan_for_words(&stripped)
        .map(|word| word.replace('-', ""))
        .collect()
}

/// Extracts words with the raw grammar only: no lowercasing, no digit
/// stripping and no hyphen removal. Used for stopword lists.
pub fn scan_for_words(s: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(s).map(|m| m.as_str())
}
