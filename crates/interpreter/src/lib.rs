//! Rule-based interpreter turning a final speech transcript into a
//! [`ParsedCommand`]. Everything here is a pure function over the text;
//! no state is held between utterances.

mod intent;
mod item_name;
mod modify;
mod price;
mod quantity;

pub use intent::classify_intent;
pub use item_name::extract_item_name;
pub use modify::{parse_modify, ModifyParts};
pub use price::parse_price_max;
pub use quantity::parse_quantity;

use voicecart_protocol::{Intent, ParsedCommand};

/// Assemble one structured command from a raw utterance.
///
/// For modify-intent text the sub-parser's item name takes precedence over
/// the generic extractor's, which usually chokes on modify-shaped phrasing.
pub fn parse_command(text: &str) -> ParsedCommand {
    let intent = classify_intent(text);
    let quantity = parse_quantity(text);
    let price_max = parse_price_max(text);
    let generic_name = extract_item_name(text);
    let modify = if intent == Intent::Modify {
        parse_modify(text)
    } else {
        ModifyParts::default()
    };

    ParsedCommand {
        intent,
        item_name: modify.item_name.or(generic_name),
        quantity,
        new_quantity: modify.new_quantity,
        new_item_name: modify.new_item_name,
        price_max,
        raw_text: text.to_string(),
    }
}
