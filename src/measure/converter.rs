//! Serving scaling and metric conversion
//!
//! Everything here is display-side: a [`Measurement`] is never modified, the
//! functions only compute the text shown for a given serving count and unit
//! system.

use serde::Serialize;

use super::units::{
    parse_number, Amount, DisplayQuantity, Measurement, MetricAmount, UnitSystem,
    ML_PER_CUP, ML_PER_OZ, ML_PER_TBSP, ML_PER_TSP, QUARTER_GLYPHS,
};

/// Inclusive range a user-adjustable serving count is kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServingBounds {
    min: u32,
    max: u32,
}

impl Default for ServingBounds {
    fn default() -> Self {
        Self { min: 1, max: 6 }
    }
}

impl ServingBounds {
    /// Create bounds; `None` unless `1 <= min <= max`
    pub fn new(min: u32, max: u32) -> Option<Self> {
        if min == 0 || min > max {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn clamp(&self, servings: u32) -> u32 {
        servings.clamp(self.min, self.max)
    }

    pub fn increment(&self, servings: u32) -> u32 {
        self.clamp(servings.saturating_add(1))
    }

    pub fn decrement(&self, servings: u32) -> u32 {
        self.clamp(servings.saturating_sub(1))
    }
}

/// Scale an amount by a serving count for display
///
/// Numeric amounts are multiplied and shown as a quarter-rounded fraction;
/// anything non-numeric comes back unchanged.
///
/// Examples:
/// - (0.5, 3) -> "1 ½"
/// - (0.25, 1) -> "¼"
/// - ("a pinch", 4) -> "a pinch"
pub fn scale_amount(amount: &Amount, servings: f64) -> String {
    match amount.as_number() {
        Some(base) => {
            let scaled = base * servings;
            if scaled.is_finite() {
                nice_fraction(scaled)
            } else {
                amount.to_string()
            }
        }
        None => amount.to_string(),
    }
}

/// Scale a raw text amount, passing through anything that is not a number
pub fn scale_text(amount: &str, servings: f64) -> String {
    match parse_number(amount) {
        Some(n) => scale_amount(&Amount::Numeric(n), servings),
        None => amount.to_string(),
    }
}

/// Format a value rounded to the nearest quarter using fraction glyphs
pub fn nice_fraction(value: f64) -> String {
    // Half-quarters round up, as the web pages did
    let quarters_total = (value * 4.0 + 0.5).floor();
    let whole = (quarters_total / 4.0).floor();
    let quarters = (quarters_total - whole * 4.0) as usize;
    let glyph = QUARTER_GLYPHS.get(quarters).copied().unwrap_or("");

    match (whole == 0.0, glyph.is_empty()) {
        (true, false) => glyph.to_string(),
        (false, false) => format!("{:.0} {}", whole, glyph),
        (_, true) => format!("{:.0}", whole),
    }
}

/// Convert an absolute US volume amount to metric
///
/// cup, oz, tbsp and tsp become rounded milliliters, dash stays a rounded dash,
/// every other unit (including "item") passes through untouched.
pub fn to_metric(unit: &str, amount: f64) -> MetricAmount {
    let factor = match unit.to_lowercase().as_str() {
        "cup" => Some((ML_PER_CUP, "ml")),
        "oz" => Some((ML_PER_OZ, "ml")),
        "tbsp" => Some((ML_PER_TBSP, "ml")),
        "tsp" => Some((ML_PER_TSP, "ml")),
        "dash" => Some((1.0, "dash")),
        _ => None,
    };

    match factor {
        Some((ml_per, metric_unit)) => MetricAmount {
            amount: (amount * ml_per).round(),
            unit: metric_unit.to_string(),
        },
        None => MetricAmount {
            amount,
            unit: unit.to_string(),
        },
    }
}

/// Compute the amount and unit shown for one ingredient line
///
/// Metric mode scales the base amount first, then converts, then rounds; it
/// never shows fraction glyphs. Qualitative amounts pass through in both modes.
pub fn display_quantity(
    measurement: &Measurement,
    servings: u32,
    system: UnitSystem,
) -> DisplayQuantity {
    let servings = f64::from(servings);

    match (system, measurement.amount.as_number()) {
        (UnitSystem::Metric, Some(base)) => {
            let metric = to_metric(&measurement.unit, base * servings);
            DisplayQuantity {
                amount: format!("{:.0}", metric.amount.round()),
                unit: metric.unit,
            }
        }
        _ => DisplayQuantity {
            amount: scale_amount(&measurement.amount, servings),
            unit: measurement.unit.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::units::ITEM_UNIT;

    fn measurement(amount: Amount, unit: &str, item: &str) -> Measurement {
        Measurement {
            amount,
            unit: unit.to_string(),
            item: item.to_string(),
            note: None,
        }
    }

    #[test]
    fn test_scale_nice_fraction() {
        assert_eq!(scale_amount(&Amount::Numeric(0.5), 3.0), "1 ½");
        assert_eq!(scale_amount(&Amount::Numeric(0.25), 1.0), "¼");
        assert_eq!(scale_amount(&Amount::Numeric(0.75), 1.0), "¾");
        assert_eq!(scale_amount(&Amount::Numeric(2.0), 2.0), "4");
        assert_eq!(scale_amount(&Amount::Numeric(1.0 / 3.0), 2.0), "¾");
    }

    #[test]
    fn test_scale_passthrough() {
        let pinch = Amount::Qualitative("a pinch".to_string());
        assert_eq!(scale_amount(&pinch, 4.0), "a pinch");
        assert_eq!(scale_text("a pinch", 4.0), "a pinch");
    }

    #[test]
    fn test_scale_numeric_string() {
        assert_eq!(scale_amount(&Amount::Qualitative("1".to_string()), 2.0), "2");
        assert_eq!(scale_text("1.5", 2.0), "3");
    }

    #[test]
    fn test_scale_non_finite_passthrough() {
        assert_eq!(scale_amount(&Amount::Numeric(2.0), f64::INFINITY), "2");
    }

    #[test]
    fn test_nice_fraction_rounding() {
        assert_eq!(nice_fraction(0.0), "0");
        assert_eq!(nice_fraction(0.1), "0");
        assert_eq!(nice_fraction(0.125), "¼");
        assert_eq!(nice_fraction(1.6), "1 ½");
        assert_eq!(nice_fraction(1.9), "2");
        assert_eq!(nice_fraction(2.7), "2 ¾");
    }

    #[test]
    fn test_to_metric_table() {
        assert_eq!(
            to_metric("cup", 2.0),
            MetricAmount { amount: 480.0, unit: "ml".to_string() }
        );
        assert_eq!(to_metric("oz", 1.5).amount, 45.0);
        assert_eq!(to_metric("tbsp", 2.0).amount, 30.0);
        assert_eq!(to_metric("tsp", 0.5).amount, 3.0);
        assert_eq!(to_metric("TSP", 1.0).unit, "ml");
    }

    #[test]
    fn test_to_metric_dash_stays_dash() {
        let m = to_metric("dash", 2.0);
        assert_eq!(m.amount, 2.0);
        assert_eq!(m.unit, "dash");
    }

    #[test]
    fn test_to_metric_passthrough() {
        assert_eq!(
            to_metric("item", 2.0),
            MetricAmount { amount: 2.0, unit: "item".to_string() }
        );
        let m = to_metric("pinch", 0.5);
        assert_eq!(m.amount, 0.5);
        assert_eq!(m.unit, "pinch");
    }

    #[test]
    fn test_to_metric_rounds() {
        assert_eq!(to_metric("tsp", 1.0 / 3.0).amount, 2.0);
        assert_eq!(to_metric("cup", 1.0 / 3.0).amount, 80.0);
    }

    #[test]
    fn test_serving_bounds_default() {
        let bounds = ServingBounds::default();
        assert_eq!(bounds.min(), 1);
        assert_eq!(bounds.max(), 6);
        assert_eq!(bounds.clamp(0), 1);
        assert_eq!(bounds.clamp(9), 6);
        assert_eq!(bounds.clamp(3), 3);
    }

    #[test]
    fn test_serving_bounds_repeated_adjustment() {
        let bounds = ServingBounds::default();
        let mut servings = 1;
        for _ in 0..20 {
            servings = bounds.increment(servings);
            assert!((1..=6).contains(&servings));
        }
        assert_eq!(servings, 6);
        for _ in 0..20 {
            servings = bounds.decrement(servings);
            assert!((1..=6).contains(&servings));
        }
        assert_eq!(servings, 1);
        assert_eq!(bounds.decrement(0), 1);
        assert_eq!(bounds.increment(u32::MAX), 6);
    }

    #[test]
    fn test_serving_bounds_validation() {
        assert!(ServingBounds::new(0, 4).is_none());
        assert!(ServingBounds::new(5, 4).is_none());
        assert_eq!(ServingBounds::new(2, 2).unwrap().clamp(7), 2);
    }

    #[test]
    fn test_display_quantity_us() {
        let m = measurement(Amount::Numeric(0.5), "cup", "milk");
        let d = display_quantity(&m, 3, UnitSystem::Us);
        assert_eq!(d.amount, "1 ½");
        assert_eq!(d.unit, "cup");
    }

    #[test]
    fn test_display_quantity_metric_scales_before_converting() {
        let m = measurement(Amount::Numeric(0.5), "cup", "milk");
        let d = display_quantity(&m, 3, UnitSystem::Metric);
        assert_eq!(d.amount, "360");
        assert_eq!(d.unit, "ml");

        let m = measurement(Amount::Numeric(1.0 / 3.0), "tsp", "cinnamon");
        let d = display_quantity(&m, 1, UnitSystem::Metric);
        assert_eq!(d.amount, "2");
    }

    #[test]
    fn test_display_quantity_metric_item_passthrough() {
        let m = measurement(Amount::Numeric(0.5), ITEM_UNIT, "lime");
        let d = display_quantity(&m, 3, UnitSystem::Metric);
        assert_eq!(d.amount, "2");
        assert_eq!(d.unit, "item");
    }

    #[test]
    fn test_display_quantity_metric_always_whole() {
        let lines = [
            measurement(Amount::Numeric(0.5), ITEM_UNIT, "lime"),
            measurement(Amount::Numeric(0.25), "pinch", "salt"),
            measurement(Amount::Numeric(1.0 / 3.0), "cup", "milk"),
            measurement(Amount::Numeric(0.75), "dash", "bitters"),
        ];
        for m in &lines {
            for servings in 1..=6 {
                let d = display_quantity(m, servings, UnitSystem::Metric);
                assert!(!d.amount.contains('.'), "non-integer metric amount {}", d.amount);
                assert!(!d.amount.contains('½') && !d.amount.contains('¼'));
            }
        }
        let d = display_quantity(&lines[1], 1, UnitSystem::Metric);
        assert_eq!(d.amount, "0");
        assert_eq!(d.unit, "pinch");
    }

    #[test]
    fn test_display_quantity_qualitative() {
        let m = measurement(Amount::Qualitative("splash".to_string()), "soda", "water");
        for system in [UnitSystem::Us, UnitSystem::Metric] {
            let d = display_quantity(&m, 4, system);
            assert_eq!(d.amount, "splash");
            assert_eq!(d.unit, "soda");
        }
    }
}
