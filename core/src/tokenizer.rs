use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}]+").expect("valid regex");
}

/// Tokenize text into lowercased word units using NFKC normalization and
/// alphanumeric boundaries. Every word survives: a query must be able to hit
/// any token that appears in a title or excerpt, so there is no stopword
/// list and no stemming.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}
