//! Keyword predicates.
//!
//! Case-insensitive substring containment against the full text. No
//! stemming, no tokenization, no word-boundary enforcement: a phrase
//! matches anywhere, so "jv" also matches inside a longer word. That
//! trade-off is part of the screening contract and is covered by tests.

/// True if at least one phrase occurs in the text.
pub fn any_present(text: &str, phrases: &[&str]) -> bool {
    let lower = text.to_lowercase();
    phrases
        .iter()
        .any(|phrase| lower.contains(&phrase.to_lowercase()))
}

/// True if every phrase occurs in the text.
pub fn all_present(text: &str, phrases: &[&str]) -> bool {
    let lower = text.to_lowercase();
    phrases
        .iter()
        .all(|phrase| lower.contains(&phrase.to_lowercase()))
}
