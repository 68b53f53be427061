//! Measurement types and conversion constants
//!
//! Provides the normalized representation of an ingredient line, the fraction
//! glyph table, and the fixed US-to-metric volume factors used for display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit recorded when no dimensional unit could be parsed
pub const ITEM_UNIT: &str = "item";

/// Annotation recorded when the line carried an `(optional)` marker
pub const OPTIONAL_NOTE: &str = "optional";

// ============================================================================
// Volume Conversion Constants (to milliliters, display-rounded)
// ============================================================================

/// Milliliters per cup
pub const ML_PER_CUP: f64 = 240.0;
/// Milliliters per ounce
pub const ML_PER_OZ: f64 = 30.0;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 15.0;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 5.0;

// ============================================================================
// Fraction Glyphs
// ============================================================================

/// Unicode vulgar fractions recognized as a leading amount token
pub const FRACTION_GLYPHS: &[(&str, f64)] = &[
    ("½", 0.5),
    ("⅓", 1.0 / 3.0),
    ("⅔", 2.0 / 3.0),
    ("¼", 0.25),
    ("¾", 0.75),
    ("⅛", 0.125),
];

/// Glyphs used when composing a quarter-rounded display amount, indexed by quarters
pub const QUARTER_GLYPHS: [&str; 4] = ["", "¼", "½", "¾"];

/// Look up the decimal value of a fraction glyph token
pub fn glyph_value(token: &str) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == token)
        .map(|(_, value)| *value)
}

/// Parse a token as a finite number
pub fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// Amount / Measurement
// ============================================================================

/// Quantity of one ingredient line
///
/// Either a number, or an opaque word kept verbatim when the leading token
/// was not numeric (e.g. "a", "few", "splash").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Numeric(f64),
    Qualitative(String),
}

impl Amount {
    /// Numeric value of this amount, if it has one
    ///
    /// Qualitative amounts that happen to spell a number ("1") count as numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Amount::Numeric(n) if n.is_finite() => Some(*n),
            Amount::Numeric(_) => None,
            Amount::Qualitative(s) => parse_number(s),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Numeric(n) => write!(f, "{}", n),
            Amount::Qualitative(s) => write!(f, "{}", s),
        }
    }
}

/// Normalized form of one ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub amount: Amount,
    pub unit: String,
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Measurement {
    /// Whether a dimensional unit was detected
    pub fn has_unit(&self) -> bool {
        self.unit != ITEM_UNIT
    }

    pub fn is_optional(&self) -> bool {
        self.note.as_deref() == Some(OPTIONAL_NOTE)
    }
}

// ============================================================================
// Display Types
// ============================================================================

/// Unit system an ingredient list is displayed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Us,
    Metric,
}

impl UnitSystem {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "us" | "imperial" => Some(UnitSystem::Us),
            "metric" => Some(UnitSystem::Metric),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            UnitSystem::Us => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Us,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Us => "us",
            UnitSystem::Metric => "metric",
        }
    }
}

/// Result of converting an absolute amount to metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAmount {
    pub amount: f64,
    pub unit: String,
}

/// Amount and unit text shown for one rendered ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayQuantity {
    pub amount: String,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_value() {
        assert_eq!(glyph_value("½"), Some(0.5));
        assert_eq!(glyph_value("¾"), Some(0.75));
        assert_eq!(glyph_value("⅛"), Some(0.125));
        assert!((glyph_value("⅓").unwrap() - 0.3333).abs() < 0.001);
        assert_eq!(glyph_value("1/2"), None);
        assert_eq!(glyph_value("½½"), None);
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("2.5"), Some(2.5));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("splash"), None);
    }

    #[test]
    fn test_amount_as_number() {
        assert_eq!(Amount::Numeric(2.0).as_number(), Some(2.0));
        assert_eq!(Amount::Qualitative("1".to_string()).as_number(), Some(1.0));
        assert_eq!(Amount::Qualitative("a".to_string()).as_number(), None);
    }

    #[test]
    fn test_amount_serializes_untagged() {
        let json = serde_json::to_string(&Amount::Numeric(0.5)).unwrap();
        assert_eq!(json, "0.5");
        let json = serde_json::to_string(&Amount::Qualitative("a".to_string())).unwrap();
        assert_eq!(json, "\"a\"");

        let back: Amount = serde_json::from_str("\"pinch\"").unwrap();
        assert_eq!(back, Amount::Qualitative("pinch".to_string()));
        let back: Amount = serde_json::from_str("3").unwrap();
        assert_eq!(back, Amount::Numeric(3.0));
    }

    #[test]
    fn test_measurement_note_skipped_when_absent() {
        let m = Measurement {
            amount: Amount::Numeric(1.0),
            unit: "cup".to_string(),
            item: "milk".to_string(),
            note: None,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("note").is_none());
        assert!(m.has_unit());
        assert!(!m.is_optional());
    }

    #[test]
    fn test_unit_system_toggle() {
        assert_eq!(UnitSystem::default(), UnitSystem::Us);
        assert_eq!(UnitSystem::Us.toggle(), UnitSystem::Metric);
        assert_eq!(UnitSystem::Metric.toggle(), UnitSystem::Us);
        assert_eq!(UnitSystem::from_str("Metric"), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::from_str("kelvin"), None);
    }
}
