//! Measurement normalization module
//!
//! Parses ingredient lines and computes their serving-scaled and metric display.

pub mod converter;
pub mod descriptors;
pub mod parser;
pub mod units;

pub use converter::{
    display_quantity, nice_fraction, scale_amount, scale_text, to_metric, ServingBounds,
};
pub use descriptors::{DescriptorSet, PRESET_NAMES};
pub use parser::{parse_ingredient, parse_ingredients};
pub use units::{
    Amount, DisplayQuantity, Measurement, MetricAmount, UnitSystem, ITEM_UNIT, OPTIONAL_NOTE,
};
