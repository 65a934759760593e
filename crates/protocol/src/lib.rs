use serde::{Deserialize, Serialize};

/// User id the persistence API falls back to when none is given.
pub const DEFAULT_USER_ID: &str = "default";

/// Action category a spoken utterance requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Add,
    Remove,
    Modify,
    Search,
    Unknown,
}

/// Structured form of one utterance, produced by the interpreter.
///
/// Field names serialize in camelCase so logs and wire payloads line up
/// with the `{ items, history }` state documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommand {
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    pub raw_text: String,
}

impl ParsedCommand {
    /// Command equivalent to tapping a suggestion: add one of `name`.
    pub fn quick_add(name: &str) -> Self {
        Self {
            intent: Intent::Add,
            item_name: Some(name.to_string()),
            quantity: Some(1),
            new_quantity: None,
            new_item_name: None,
            price_max: None,
            raw_text: format!("add {name}"),
        }
    }
}

/// One entry on the shopping list.
///
/// `name` is the identity key (compared case-insensitively); `id` stays
/// stable across quantity changes and renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub category: String,
}

/// Per-user persisted state: current list plus the purchase-memory log.
///
/// `history` holds distinct lowercase names in first-added order and is
/// never trimmed when items are removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    #[serde(default)]
    pub history: Vec<String>,
}

/// Catalog row used only by search-intent matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub brand: String,
    pub price: f64,
}

/// A proposed item with the reason it is being offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub reason: String,
}
