use once_cell::sync::Lazy;
use voicecart_protocol::CatalogEntry;

/// Static reference catalog backing search-intent commands. Not a product
/// database: just enough rows to answer "find X under $N".
static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    [
        ("organic apples", "Fresh Farms", 3.99),
        ("apples", "Local Orchard", 2.49),
        ("almond milk", "NutriGood", 4.50),
        ("regular milk", "DairyPure", 2.99),
        ("toothpaste", "SmileBright", 4.99),
        ("toothpaste", "BudgetClean", 2.49),
    ]
    .into_iter()
    .map(|(name, brand, price)| CatalogEntry {
        name: name.to_string(),
        brand: brand.to_string(),
        price,
    })
    .collect()
});

/// Case-insensitive substring search with an optional price ceiling.
pub fn search(query: &str, price_max: Option<f64>) -> Vec<CatalogEntry> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .filter(|entry| price_max.map_or(true, |max| entry.price <= max))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::search;
    use pretty_assertions::assert_eq;

    #[test]
    fn substring_match_is_case_insensitive() {
        let results = search("Apples", None);
        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|e| e.name == "organic apples"));
    }

    #[test]
    fn price_ceiling_filters_results() {
        let results = search("apples", Some(3.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].brand, "Local Orchard");
        assert_eq!(results[0].price, 2.49);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(search("caviar", None).is_empty());
        assert!(search("apples", Some(1.0)).is_empty());
    }
}
