use log::debug;
use uuid::Uuid;
use voicecart_protocol::{CatalogEntry, Intent, ParsedCommand, ShoppingItem, UserState};

use crate::catalog;
use crate::category::categorize;

/// Result of applying one command. Every variant carries enough to render
/// the user-facing status line; nothing here is optional logging.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added { name: String, quantity: u32 },
    Removed { name: String },
    QuantitySet { name: String, quantity: u32 },
    Renamed { from: String, to: String },
    SearchResults { query: String, matches: Vec<CatalogEntry> },
    Clarify { message: String },
    Unrecognized,
}

impl Outcome {
    /// Status message summarizing the outcome.
    pub fn status(&self) -> String {
        match self {
            Outcome::Added { name, quantity } => {
                format!("Added {quantity} {name} to your list.")
            }
            Outcome::Removed { name } => format!("Removed {name} from your list."),
            Outcome::QuantitySet { name, quantity } => {
                format!("Updated {name} quantity to {quantity}.")
            }
            Outcome::Renamed { from, to } => format!("Changed {from} to {to}."),
            Outcome::SearchResults { matches, .. } => {
                if matches.is_empty() {
                    "No items found that match your search.".to_string()
                } else {
                    format!("Found {} matching items.", matches.len())
                }
            }
            Outcome::Clarify { message } => message.clone(),
            Outcome::Unrecognized => {
                "I couldn't recognize that command. Try saying 'Add milk' or \
                 'Find apples under 5 dollars'."
                    .to_string()
            }
        }
    }

    /// Whether the list or history changed as a result of this command.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            Outcome::Added { .. }
                | Outcome::Removed { .. }
                | Outcome::QuantitySet { .. }
                | Outcome::Renamed { .. }
        )
    }
}

/// Owns one user's list and purchase history. Callers hold the session
/// explicitly; there is no shared global state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    items: Vec<ShoppingItem>,
    history: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: UserState) -> Self {
        Self {
            items: state.items,
            history: state.history,
        }
    }

    /// Snapshot for persistence.
    pub fn state(&self) -> UserState {
        UserState {
            items: self.items.clone(),
            history: self.history.clone(),
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Apply a validated command. Guard: a known intent without an item
    /// name never mutates anything and asks for clarification instead.
    pub fn apply(&mut self, cmd: &ParsedCommand) -> Outcome {
        if cmd.intent == Intent::Unknown {
            return Outcome::Unrecognized;
        }
        let Some(name) = cmd.item_name.as_deref() else {
            debug!("no item name in {:?} command: {:?}", cmd.intent, cmd.raw_text);
            return Outcome::Clarify {
                message: "I heard you, but could not detect the item name.".to_string(),
            };
        };
        let name = name.trim();

        match cmd.intent {
            Intent::Add => self.add(name, cmd.quantity.unwrap_or(1)),
            Intent::Remove => self.remove(name),
            Intent::Modify => self.modify(name, cmd.new_quantity, cmd.new_item_name.as_deref()),
            Intent::Search => Outcome::SearchResults {
                query: name.to_string(),
                matches: catalog::search(name, cmd.price_max),
            },
            Intent::Unknown => Outcome::Unrecognized,
        }
    }

    fn find_index(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.items.iter().position(|i| i.name.to_lowercase() == needle)
    }

    /// Merge into an existing entry (case-insensitive) or create a new one.
    fn add(&mut self, name: &str, quantity: u32) -> Outcome {
        match self.find_index(name) {
            Some(idx) => {
                self.items[idx].quantity = self.items[idx].quantity.saturating_add(quantity);
                debug!(
                    "merged {quantity} into existing item {:?} (now {})",
                    self.items[idx].name, self.items[idx].quantity
                );
            }
            None => {
                self.items.push(ShoppingItem {
                    id: Uuid::new_v4().to_string(),
                    name: name.to_string(),
                    quantity,
                    category: categorize(name),
                });
            }
        }

        let lower = name.to_lowercase();
        if !self.history.contains(&lower) {
            self.history.push(lower);
        }

        Outcome::Added {
            name: name.to_string(),
            quantity,
        }
    }

    /// Delete every case-insensitive match; removing a name that is not on
    /// the list is a quiet no-op.
    fn remove(&mut self, name: &str) -> Outcome {
        let needle = name.to_lowercase();
        self.items.retain(|i| i.name.to_lowercase() != needle);
        Outcome::Removed {
            name: name.to_string(),
        }
    }

    fn modify(
        &mut self,
        name: &str,
        new_quantity: Option<u32>,
        new_item_name: Option<&str>,
    ) -> Outcome {
        if let Some(quantity) = new_quantity {
            if quantity == 0 {
                // Setting a quantity of zero removes the entry; the list
                // never persists zero-quantity items.
                let needle = name.to_lowercase();
                self.items.retain(|i| i.name.to_lowercase() != needle);
            } else if let Some(idx) = self.find_index(name) {
                self.items[idx].quantity = quantity;
            }
            return Outcome::QuantitySet {
                name: name.to_string(),
                quantity,
            };
        }

        if let Some(new_name) = new_item_name.map(str::trim).filter(|n| !n.is_empty()) {
            if let Some(idx) = self.find_index(name) {
                self.items[idx].name = new_name.to_string();
                self.items[idx].category = categorize(new_name);
            }
            return Outcome::Renamed {
                from: name.to_string(),
                to: new_name.to_string(),
            };
        }

        Outcome::Clarify {
            message: "Say something like \"Change milk to 3\" or \"Update milk to oat milk\"."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, Session};
    use pretty_assertions::assert_eq;
    use voicecart_protocol::{Intent, ParsedCommand};

    fn cmd(intent: Intent) -> ParsedCommand {
        ParsedCommand {
            intent,
            item_name: None,
            quantity: None,
            new_quantity: None,
            new_item_name: None,
            price_max: None,
            raw_text: String::new(),
        }
    }

    fn add(name: &str, quantity: Option<u32>) -> ParsedCommand {
        ParsedCommand {
            item_name: Some(name.to_string()),
            quantity,
            ..cmd(Intent::Add)
        }
    }

    #[test]
    fn add_defaults_quantity_to_one() {
        let mut session = Session::new();
        let outcome = session.apply(&add("milk", None));
        assert_eq!(
            outcome,
            Outcome::Added {
                name: "milk".to_string(),
                quantity: 1
            }
        );
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.items()[0].quantity, 1);
        assert_eq!(session.items()[0].category, "Dairy");
        assert_eq!(session.history(), &["milk".to_string()]);
    }

    #[test]
    fn repeated_add_merges_case_insensitively() {
        let mut session = Session::new();
        session.apply(&add("milk", None));
        session.apply(&add("Milk", Some(2)));
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.items()[0].quantity, 3);
        // identity and history keep the first spelling
        assert_eq!(session.items()[0].name, "milk");
        assert_eq!(session.history(), &["milk".to_string()]);
    }

    #[test]
    fn merge_saturates_instead_of_overflowing() {
        let mut session = Session::new();
        session.apply(&add("milk", Some(u32::MAX)));
        session.apply(&add("milk", Some(2)));
        assert_eq!(session.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn merge_keeps_item_id_stable() {
        let mut session = Session::new();
        session.apply(&add("milk", None));
        let id = session.items()[0].id.clone();
        session.apply(&add("milk", Some(4)));
        assert_eq!(session.items()[0].id, id);
    }

    #[test]
    fn remove_deletes_all_matches_and_ignores_missing() {
        let mut session = Session::new();
        session.apply(&add("milk", None));
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("MILK".to_string()),
            ..cmd(Intent::Remove)
        });
        assert_eq!(
            outcome,
            Outcome::Removed {
                name: "MILK".to_string()
            }
        );
        assert!(session.items().is_empty());
        // history is a purchase memory, not a list mirror
        assert_eq!(session.history(), &["milk".to_string()]);

        // removing again is a no-op, not an error
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("milk".to_string()),
            ..cmd(Intent::Remove)
        });
        assert!(matches!(outcome, Outcome::Removed { .. }));
    }

    #[test]
    fn modify_quantity_keeps_identity_and_category() {
        let mut session = Session::new();
        session.apply(&add("milk", None));
        let id = session.items()[0].id.clone();
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("milk".to_string()),
            new_quantity: Some(5),
            ..cmd(Intent::Modify)
        });
        assert_eq!(
            outcome,
            Outcome::QuantitySet {
                name: "milk".to_string(),
                quantity: 5
            }
        );
        assert_eq!(session.items()[0].quantity, 5);
        assert_eq!(session.items()[0].id, id);
        assert_eq!(session.items()[0].category, "Dairy");
    }

    #[test]
    fn modify_quantity_zero_removes_the_item() {
        let mut session = Session::new();
        session.apply(&add("milk", None));
        session.apply(&ParsedCommand {
            item_name: Some("milk".to_string()),
            new_quantity: Some(0),
            ..cmd(Intent::Modify)
        });
        assert!(session.items().is_empty());
    }

    #[test]
    fn modify_rename_recomputes_category_and_keeps_quantity() {
        let mut session = Session::new();
        session.apply(&add("bread", Some(2)));
        assert_eq!(session.items()[0].category, "Grains");
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("bread".to_string()),
            new_item_name: Some("oat milk".to_string()),
            ..cmd(Intent::Modify)
        });
        assert_eq!(
            outcome,
            Outcome::Renamed {
                from: "bread".to_string(),
                to: "oat milk".to_string()
            }
        );
        assert_eq!(session.items()[0].name, "oat milk");
        assert_eq!(session.items()[0].category, "Dairy");
        assert_eq!(session.items()[0].quantity, 2);
    }

    #[test]
    fn modify_without_operands_asks_for_clarification() {
        let mut session = Session::new();
        session.apply(&add("milk", None));
        let before = session.state();
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("milk".to_string()),
            ..cmd(Intent::Modify)
        });
        assert!(matches!(outcome, Outcome::Clarify { .. }));
        assert_eq!(session.state(), before);
    }

    #[test]
    fn modify_missing_item_is_a_no_op() {
        let mut session = Session::new();
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("milk".to_string()),
            new_quantity: Some(5),
            ..cmd(Intent::Modify)
        });
        assert!(matches!(outcome, Outcome::QuantitySet { .. }));
        assert!(session.items().is_empty());
    }

    #[test]
    fn missing_item_name_never_mutates() {
        let mut session = Session::new();
        session.apply(&add("milk", None));
        let before = session.state();
        let outcome = session.apply(&cmd(Intent::Remove));
        assert!(matches!(outcome, Outcome::Clarify { .. }));
        assert_eq!(session.state(), before);
    }

    #[test]
    fn unknown_intent_reports_unrecognized() {
        let mut session = Session::new();
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("whatever".to_string()),
            ..cmd(Intent::Unknown)
        });
        assert_eq!(outcome, Outcome::Unrecognized);
    }

    #[test]
    fn search_filters_catalog_without_mutation() {
        let mut session = Session::new();
        let outcome = session.apply(&ParsedCommand {
            item_name: Some("apples".to_string()),
            price_max: Some(3.0),
            ..cmd(Intent::Search)
        });
        let Outcome::SearchResults { matches, .. } = outcome else {
            panic!("expected search results");
        };
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].price, 2.49);
        assert!(session.items().is_empty());
    }

    #[test]
    fn status_lines_cover_every_branch() {
        assert_eq!(
            Outcome::Added {
                name: "milk".to_string(),
                quantity: 2
            }
            .status(),
            "Added 2 milk to your list."
        );
        assert!(Outcome::Unrecognized.status().contains("Add milk"));
        assert_eq!(
            Outcome::SearchResults {
                query: "caviar".to_string(),
                matches: Vec::new()
            }
            .status(),
            "No items found that match your search."
        );
    }
}
