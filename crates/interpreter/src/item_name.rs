use once_cell::sync::Lazy;
use regex::Regex;

use crate::quantity::{parse_quantity, NUMBER_WORDS, UNIT_NOUNS};

/// Ordered rewrite rules that peel command-carrier phrases off the
/// lowercased utterance. Each stage is a plain (pattern, replacement)
/// pair so the precedence between overlapping rules stays auditable.
const STRIP_RULES: &[(&str, &str)] = &[
    // add-style carrier verbs
    (r"(?:add|i (?:need|want to buy)|put|buy)(?:\s+|$)", ""),
    // remove-style carrier verbs
    (r"(?:remove|delete|take off|clear)(?:\s+|$)", ""),
    // search-style carrier verbs
    (r"(?:find|look for|search(?:\s+for)?)(?:\s+|$)", ""),
    // price-ceiling phrase, so "under 3 dollars" never leaks into the name
    (
        r"\s*(?:under|below|less than)\s*\$?\s*\d+(?:\.\d+)?(?:\s*(?:dollars?|bucks?))?",
        "",
    ),
    // list references and politeness words
    (r"\s*(?:from|off)\s+(?:my|the)\s+list", ""),
    (r"to (?:my|the) list|on my list|please|thank you|thanks?", ""),
];

static CARRIER_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    STRIP_RULES
        .iter()
        .map(|(pattern, replacement)| {
            (Regex::new(pattern).expect("carrier rule pattern"), *replacement)
        })
        .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static FIRST_DIGIT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+\b").expect("digit token pattern"));

static FIRST_NUMBER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b(?:{NUMBER_WORDS})\b")).expect("number word pattern"));

static FIRST_UNIT_NOUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b(?:{UNIT_NOUNS})\b")).expect("unit noun pattern"));

fn collapse(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Isolate the noun phrase naming the item, or `None` when nothing is left.
///
/// Known limitation: utterances outside the expected templates can keep
/// stray connective words ("the", "of") in the extracted name.
pub fn extract_item_name(text: &str) -> Option<String> {
    let mut text = text.to_lowercase();
    for (rule, replacement) in CARRIER_RULES.iter() {
        text = rule.replace_all(&text, *replacement).into_owned();
    }
    let mut text = collapse(&text);

    // Excise quantity and unit tokens once a quantity is detected in the
    // cleaned text: first digit token, first number word, first unit noun,
    // each independently.
    if parse_quantity(&text).is_some() {
        text = collapse(&FIRST_DIGIT_TOKEN.replace(&text, ""));
        text = collapse(&FIRST_NUMBER_WORD.replace(&text, ""));
        let without_unit = collapse(&FIRST_UNIT_NOUN.replace(&text, ""));
        // A unit noun that is the entire remaining phrase is the item
        // itself ("add 3 apples"), not a countable suffix.
        if !without_unit.is_empty() {
            text = without_unit;
        }
    }

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
