use chrono::{Datelike, Utc};
use voicecart_protocol::Suggestion;

use crate::session::Session;

/// Cap on "you often buy this" suggestions.
pub const MAX_HISTORY_PICKS: usize = 5;

/// Month-indexed (0 = January) seasonal picks.
const SEASONAL_ITEMS: [&[&str]; 12] = [
    &["oranges", "hot chocolate"],
    &["strawberries", "valentine chocolates"],
    &["asparagus", "spring mix salad"],
    &["mangoes", "iced tea"],
    &["watermelon", "ice cream"],
    &["berries mix", "grill sausages"],
    &["corn", "lemonade"],
    &["peaches", "iced coffee"],
    &["pumpkin", "soup mix"],
    &["sweet potatoes", "spices"],
    &["cranberries", "stuffing mix"],
    &["cookies", "baking chocolate"],
];

const SUBSTITUTES: &[(&str, &[&str])] = &[
    ("milk", &["almond milk", "soy milk", "oat milk"]),
    ("bread", &["whole grain bread", "gluten-free bread"]),
    ("butter", &["olive oil spread", "ghee"]),
    ("sugar", &["brown sugar", "honey"]),
];

/// Items bought before but not currently on the list, oldest first.
pub fn history_picks(session: &Session) -> Vec<Suggestion> {
    session
        .history()
        .iter()
        .filter(|name| {
            !session
                .items()
                .iter()
                .any(|item| item.name.to_lowercase() == **name)
        })
        .take(MAX_HISTORY_PICKS)
        .map(|name| Suggestion {
            name: name.clone(),
            reason: "You often buy this".to_string(),
        })
        .collect()
}

/// Seasonal picks for the current month.
pub fn seasonal_picks() -> Vec<Suggestion> {
    seasonal_picks_for_month(Utc::now().month0() as usize)
}

pub fn seasonal_picks_for_month(month0: usize) -> Vec<Suggestion> {
    let Some(names) = SEASONAL_ITEMS.get(month0) else {
        return Vec::new();
    };
    names
        .iter()
        .map(|name| Suggestion {
            name: (*name).to_string(),
            reason: "Seasonal pick".to_string(),
        })
        .collect()
}

/// Alternatives for the item the last command targeted.
pub fn substitute_picks(item_name: &str) -> Vec<Suggestion> {
    let key = item_name.to_lowercase();
    SUBSTITUTES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(name, alternatives)| {
            alternatives
                .iter()
                .map(|alt| Suggestion {
                    name: (*alt).to_string(),
                    reason: format!("Alternative to {name}"),
                })
                .collect()
        })
        .unwrap_or_default()
}
