//! Ingredient line parser
//!
//! Turns free text like "8 oz cold brew concentrate" or "½ tsp honey" into a
//! [`Measurement`]. Parsing never fails: text that does not fit the
//! `<amount> <unit> <item>` shape degrades to a less structured measurement.

use super::descriptors::DescriptorSet;
use super::units::{glyph_value, parse_number, Amount, Measurement, ITEM_UNIT, OPTIONAL_NOTE};

const OPTIONAL_MARKER: &str = "(optional)";

/// Parse one ingredient line
///
/// Examples (empty descriptor set unless noted):
/// - "½ tsp honey" -> 0.5 / "tsp" / "honey"
/// - "1 cup of sugar" -> 1 / "cup" / "sugar"
/// - "2 tbsp chocolate syrup (optional)" -> 2 / "tbsp" / "chocolate syrup", note "optional"
/// - "Ice" -> "1" / "item" / "Ice"
/// - "2 fresh mint leaves" with "fresh" as a descriptor -> 2 / "item" / "fresh mint leaves"
pub fn parse_ingredient(text: &str, descriptors: &DescriptorSet) -> Measurement {
    let trimmed = text.trim();
    let normalized = replace_of(trimmed);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    if tokens.len() < 2 {
        return Measurement {
            amount: Amount::Qualitative("1".to_string()),
            unit: ITEM_UNIT.to_string(),
            item: trimmed.to_string(),
            note: None,
        };
    }

    let amount = parse_amount(tokens[0]);
    let mut unit = tokens[1].to_string();
    let mut item = tokens[2..].join(" ");

    if descriptors.contains(&unit) {
        item = if item.is_empty() {
            unit
        } else {
            format!("{} {}", unit, item)
        };
        unit = ITEM_UNIT.to_string();
    }

    let (item, note) = extract_optional(&item);

    Measurement {
        amount,
        unit,
        item,
        note,
    }
}

/// Parse a list of ingredient lines with one vocabulary
pub fn parse_ingredients<I, S>(lines: I, descriptors: &DescriptorSet) -> Vec<Measurement>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| parse_ingredient(line.as_ref(), descriptors))
        .collect()
}

/// Resolve the leading token: glyph first, then number, else kept verbatim
fn parse_amount(token: &str) -> Amount {
    if let Some(value) = glyph_value(token) {
        return Amount::Numeric(value);
    }
    match parse_number(token) {
        Some(value) => Amount::Numeric(value),
        None => Amount::Qualitative(token.to_string()),
    }
}

/// Replace every case-insensitive " of " with a single space
fn replace_of(text: &str) -> String {
    const NEEDLE: &[u8] = b" of ";

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;

    // Matches start and end on ASCII spaces, so slicing stays on char boundaries
    while i + NEEDLE.len() <= bytes.len() {
        if bytes[i..i + NEEDLE.len()].eq_ignore_ascii_case(NEEDLE) {
            out.push_str(&text[last..i]);
            out.push(' ');
            i += NEEDLE.len();
            last = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Strip the first "(optional)" marker from an item
fn extract_optional(item: &str) -> (String, Option<String>) {
    match item.find(OPTIONAL_MARKER) {
        Some(pos) => {
            let before = item[..pos].trim_end();
            let after = item[pos + OPTIONAL_MARKER.len()..].trim_start();
            let stripped = match (before.is_empty(), after.is_empty()) {
                (false, false) => format!("{} {}", before, after),
                (false, true) => before.to_string(),
                (true, _) => after.to_string(),
            };
            (stripped, Some(OPTIONAL_NOTE.to_string()))
        }
        None => (item.to_string(), None),
    }
}
