use once_cell::sync::Lazy;
use regex::Regex;

/// Nouns that may trail a quantity ("2 bottles", "three packs").
pub(crate) const UNIT_NOUNS: &str = "items?|pieces?|bottles?|packs?|oranges?|apples?";

pub(crate) const NUMBER_WORDS: &str = "one|two|three|four|five|six|seven|eight|nine|ten";

static DIGIT_QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(\d+)\b(?:\s+(?:{UNIT_NOUNS}))?")).expect("digit quantity pattern")
});

static WORD_QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({NUMBER_WORDS})\b(?:\s+(?:{UNIT_NOUNS}))?"))
        .expect("word quantity pattern")
});

fn number_word_value(word: &str) -> Option<u32> {
    let value = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => return None,
    };
    Some(value)
}

/// Extract the amount an utterance asks for, if any.
///
/// Digits win over spelled-out words, and only the first match in the
/// string counts; multiple quantities per utterance are not supported.
pub fn parse_quantity(text: &str) -> Option<u32> {
    if let Some(caps) = DIGIT_QUANTITY.captures(text) {
        return caps[1].parse().ok();
    }
    WORD_QUANTITY
        .captures(text)
        .and_then(|caps| number_word_value(&caps[1].to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::parse_quantity;
    use pretty_assertions::assert_eq;

    #[test]
    fn digits_with_and_without_unit() {
        assert_eq!(parse_quantity("add 3 apples"), Some(3));
        assert_eq!(parse_quantity("add 12 bottles of water"), Some(12));
        assert_eq!(parse_quantity("buy 2"), Some(2));
    }

    #[test]
    fn spelled_out_words_case_insensitive() {
        assert_eq!(parse_quantity("I need Two packs of rice"), Some(2));
        assert_eq!(parse_quantity("add ten items"), Some(10));
        assert_eq!(parse_quantity("one loaf of bread"), Some(1));
    }

    #[test]
    fn digits_take_priority_over_words() {
        assert_eq!(parse_quantity("two bags and 5 apples"), Some(5));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(parse_quantity("add 3 apples and 4 oranges"), Some(3));
    }

    #[test]
    fn absent_when_no_quantity() {
        assert_eq!(parse_quantity("add milk"), None);
        assert_eq!(parse_quantity("someone bought bread"), None);
    }
}
