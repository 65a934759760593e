/// Keyword table mapping item names to aisle categories. Order matters:
/// the first category whose keyword occurs in the name wins.
const CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("Dairy", &["milk", "cheese", "yogurt", "butter"]),
    (
        "Produce",
        &["apple", "banana", "orange", "tomato", "onion", "lettuce", "spinach"],
    ),
    ("Grains", &["bread", "rice", "pasta", "cereal"]),
    ("Snacks", &["chips", "cookies", "snack", "chocolate"]),
    ("Household", &["soap", "shampoo", "toothpaste", "detergent"]),
];

pub const DEFAULT_CATEGORY: &str = "Other";

/// Derive the category from an item name. Deterministic: the category of
/// an item is always a function of its current name.
pub fn categorize(name: &str) -> String {
    let lower = name.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return (*category).to_string();
        }
    }
    DEFAULT_CATEGORY.to_string()
}
