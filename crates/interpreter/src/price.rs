use once_cell::sync::Lazy;
use regex::Regex;

static PRICE_CEILING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:under|below|less than)\s*\$?\s*(\d+(?:\.\d+)?)")
        .expect("price ceiling pattern")
});

/// Extract an upper price bound ("under $5", "below 3.50", "less than 2 dollars").
pub fn parse_price_max(text: &str) -> Option<f64> {
    PRICE_CEILING
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}
