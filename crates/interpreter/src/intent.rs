use once_cell::sync::Lazy;
use regex::Regex;
use voicecart_protocol::Intent;

static ADD_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:add|i need|i want to buy|put|buy)\b").expect("add keywords"));

static REMOVE_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:remove|delete|take off|clear)\b").expect("remove keywords"));

static MODIFY_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:change|update|set|modify|replace)\b").expect("modify keywords"));

static SEARCH_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:find|search|look for)\b").expect("search keywords"));

/// Classify an utterance into exactly one intent.
///
/// The rules are evaluated in a fixed order and the first match wins:
/// add > remove > modify > search. Utterances containing keywords from
/// several sets always resolve to the earliest rule.
pub fn classify_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();
    if ADD_KEYWORDS.is_match(&lower) {
        Intent::Add
    } else if REMOVE_KEYWORDS.is_match(&lower) {
        Intent::Remove
    } else if MODIFY_KEYWORDS.is_match(&lower) {
        Intent::Modify
    } else if SEARCH_KEYWORDS.is_match(&lower) {
        Intent::Search
    } else {
        Intent::Unknown
    }
}
