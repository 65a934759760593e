use once_cell::sync::Lazy;
use regex::Regex;

/// Operands recovered from a modify-intent utterance. At most one of
/// `new_quantity` / `new_item_name` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifyParts {
    pub item_name: Option<String>,
    pub new_quantity: Option<u32>,
    pub new_item_name: Option<String>,
}

static QUANTITY_TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:change|update|set|modify)\s+(.+?)\s+to\s+(\d+)\s*$")
        .expect("quantity-change template")
});

static RENAME_TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:change|update|replace)\s+(.+?)\s+to\s+(.+?)\s*$").expect("rename template")
});

static LEADING_QUANTITY_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*(?:quantity|amount|number)\s+of\s+").expect("leading quantity phrase")
});

fn strip_leading_phrase(item: &str) -> String {
    LEADING_QUANTITY_PHRASE.replace(item, "").trim().to_string()
}

/// Distinguish the two modify templates and pull out their operands.
///
/// Quantity-change ("change milk to 5") is tried before rename
/// ("change milk to oat milk"); a trailing integer always reads as a
/// quantity. Neither template matching yields empty parts.
pub fn parse_modify(text: &str) -> ModifyParts {
    let lower = text.to_lowercase();

    if let Some(caps) = QUANTITY_TEMPLATE.captures(&lower) {
        let item = strip_leading_phrase(&caps[1]);
        return ModifyParts {
            item_name: (!item.is_empty()).then_some(item),
            new_quantity: caps[2].parse().ok(),
            new_item_name: None,
        };
    }

    if let Some(caps) = RENAME_TEMPLATE.captures(&lower) {
        let from = strip_leading_phrase(&caps[1]);
        let to = caps[2].trim().to_string();
        if !from.is_empty() && !to.is_empty() && from != to {
            return ModifyParts {
                item_name: Some(from),
                new_quantity: None,
                new_item_name: Some(to),
            };
        }
    }

    ModifyParts::default()
}

#[cfg(test)]
mod tests {
    use super::{parse_modify, ModifyParts};
    use pretty_assertions::assert_eq;

    #[test]
    fn quantity_change_template() {
        assert_eq!(
            parse_modify("change milk to 5"),
            ModifyParts {
                item_name: Some("milk".to_string()),
                new_quantity: Some(5),
                new_item_name: None,
            }
        );
        assert_eq!(
            parse_modify("Set the quantity of apples to 10"),
            ModifyParts {
                item_name: Some("the apples".to_string()),
                new_quantity: Some(10),
                new_item_name: None,
            }
        );
    }

    #[test]
    fn rename_template() {
        assert_eq!(
            parse_modify("change milk to oat milk"),
            ModifyParts {
                item_name: Some("milk".to_string()),
                new_quantity: None,
                new_item_name: Some("oat milk".to_string()),
            }
        );
        assert_eq!(
            parse_modify("update bread to gluten-free bread"),
            ModifyParts {
                item_name: Some("bread".to_string()),
                new_quantity: None,
                new_item_name: Some("gluten-free bread".to_string()),
            }
        );
    }

    #[test]
    fn trailing_integer_reads_as_quantity_not_rename() {
        let parts = parse_modify("update milk to 2");
        assert_eq!(parts.new_quantity, Some(2));
        assert_eq!(parts.new_item_name, None);
    }

    #[test]
    fn rename_to_same_name_is_rejected() {
        assert_eq!(parse_modify("change milk to milk"), ModifyParts::default());
    }

    #[test]
    fn off_template_text_yields_empty_parts() {
        assert_eq!(parse_modify("modify my list somehow"), ModifyParts::default());
        assert_eq!(parse_modify("set a reminder"), ModifyParts::default());
    }
}
